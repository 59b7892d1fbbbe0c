//! WhatsOnChain configuration and response types.

use std::time::Duration;

use bsv_primitives::Network;
use serde::{Deserialize, Deserializer, Serialize};

/// Configuration for a [`WocClient`](crate::WocClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WocConfig {
    /// API root, e.g. `https://api.whatsonchain.com`.
    pub base_url: String,
    /// Network whose endpoints are queried.
    pub network: Network,
    /// Timeout for each HTTP request.
    pub timeout: Duration,
}

impl WocConfig {
    /// Default configuration for `network`.
    pub fn for_network(network: Network) -> Self {
        Self { network, ..Self::default() }
    }
}

impl Default for WocConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.whatsonchain.com".to_string(),
            network: Network::Mainnet,
            timeout: Duration::from_secs(30),
        }
    }
}

/// One entry of `/address/{addr}/unspent/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WocUnspent {
    /// Confirmation height, zero when unconfirmed.
    #[serde(default)]
    pub height: i64,
    /// Output index.
    pub tx_pos: u32,
    /// Funding transaction id.
    pub tx_hash: String,
    /// Value in satoshis.
    pub value: u64,
    /// Whether a mempool transaction already spends this output.
    #[serde(default, rename = "isSpentInMempoolTx")]
    pub is_spent_in_mempool_tx: bool,
    /// Confirmation status, e.g. `confirmed` or `unconfirmed`.
    #[serde(default)]
    pub status: String,
}

/// Response of `/address/{addr}/unspent/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentAllResponse {
    /// The queried address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// Locking script of the address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub script: String,
    /// Unspent outputs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: Vec<WocUnspent>,
    /// Error text, empty on success.
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! ARC data types: configuration, status vocabulary, and API payloads.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a transaction as reported by ARC.
///
/// Strings outside the known vocabulary are kept as [`TxStatus::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TxStatus {
    /// Received by ARC.
    Received,
    /// Stored and validated by ARC.
    Stored,
    /// Announced to the network.
    AnnouncedToNetwork,
    /// Seen on the network.
    SeenOnNetwork,
    /// Seen by the network.
    SeenByNetwork,
    /// Included in a block.
    Mined,
    /// Rejected by the network.
    Rejected,
    /// Rejected because it double spends.
    DoubleSpendAttempted,
    /// A status this client does not know.
    Unknown(String),
}

impl TxStatus {
    /// The ARC spelling of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Received => "RECEIVED",
            Self::Stored => "STORED",
            Self::AnnouncedToNetwork => "ANNOUNCED_TO_NETWORK",
            Self::SeenOnNetwork => "SEEN_ON_NETWORK",
            Self::SeenByNetwork => "SEEN_BY_NETWORK",
            Self::Mined => "MINED",
            Self::Rejected => "REJECTED",
            Self::DoubleSpendAttempted => "DOUBLE_SPEND_ATTEMPTED",
            Self::Unknown(s) => s,
        }
    }

    /// Whether the status can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Mined | Self::Rejected | Self::DoubleSpendAttempted)
    }

    /// A human-readable description.
    pub fn description(&self) -> String {
        match self {
            Self::Received => "Transaction received by ARC".into(),
            Self::Stored => "Transaction stored and validated by ARC".into(),
            Self::AnnouncedToNetwork => "Transaction announced to the BSV network".into(),
            Self::SeenOnNetwork | Self::SeenByNetwork => {
                "Transaction seen on the BSV network".into()
            }
            Self::Mined => "Transaction successfully mined in a block".into(),
            Self::Rejected => "Transaction rejected by the network".into(),
            Self::DoubleSpendAttempted => "Transaction rejected due to double spend attempt".into(),
            Self::Unknown(s) => format!("Unknown status: {}", s),
        }
    }
}

impl Default for TxStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for TxStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "RECEIVED" => Self::Received,
            "STORED" => Self::Stored,
            "ANNOUNCED_TO_NETWORK" => Self::AnnouncedToNetwork,
            "SEEN_ON_NETWORK" => Self::SeenOnNetwork,
            "SEEN_BY_NETWORK" => Self::SeenByNetwork,
            "MINED" => Self::Mined,
            "REJECTED" => Self::Rejected,
            "DOUBLE_SPEND_ATTEMPTED" => Self::DoubleSpendAttempted,
            _ => Self::Unknown(s),
        }
    }
}

impl From<&str> for TxStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<TxStatus> for String {
    fn from(status: TxStatus) -> Self {
        match status {
            TxStatus::Unknown(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for an [`ArcClient`](crate::ArcClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcConfig {
    /// Base URL of the ARC service, without the `/v1` suffix.
    pub base_url: String,
    /// Optional Bearer token for authentication.
    pub api_key: Option<String>,
    /// Timeout for each HTTP request.
    pub timeout: Duration,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            base_url: "https://arc.taal.com".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Body of a broadcast request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRequest {
    /// Raw transaction hex.
    pub raw_tx: String,
}

/// Response to a successful broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResponse {
    /// Transaction ID.
    pub txid: String,
    /// Status after submission.
    #[serde(default)]
    pub tx_status: TxStatus,
    /// Extra information from the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    /// Timestamp of the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Response to a status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxStatusResponse {
    /// Transaction ID.
    pub txid: String,
    /// Current status.
    #[serde(default)]
    pub tx_status: TxStatus,
    /// Extra information from the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    /// Timestamp of the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Hash of the containing block, once mined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    /// Height of the containing block, once mined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
}

impl TxStatusResponse {
    /// Block hash and height, when the transaction is in a block.
    pub fn block(&self) -> Option<(&str, u64)> {
        match self.block_hash.as_deref() {
            Some(hash) if !hash.is_empty() => Some((hash, self.block_height.unwrap_or_default())),
            _ => None,
        }
    }
}

/// Error document returned with non-success statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status echoed by ARC.
    #[serde(default)]
    pub status: i64,
    /// ARC error code.
    #[serde(default)]
    pub code: i64,
    /// Error text.
    #[serde(default)]
    pub error: String,
}

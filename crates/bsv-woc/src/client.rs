//! WhatsOnChain HTTP client.

use bsv_carve::{dedup_utxos, Utxo, UtxoProvider};
use bsv_script::Address;

use crate::error::WocError;
use crate::types::{UnspentAllResponse, WocConfig};

/// HTTP client for the WhatsOnChain API.
#[derive(Debug, Clone)]
pub struct WocClient {
    /// Client configuration.
    config: WocConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl WocClient {
    /// Create a new WhatsOnChain client with the given configuration.
    pub fn new(mut config: WocConfig) -> Result<Self, WocError> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// The configuration in use.
    pub fn config(&self) -> &WocConfig {
        &self.config
    }

    /// Spendable outputs of `address`.
    ///
    /// Entries already spent in the mempool are dropped, then duplicates
    /// by `(txid, vout)`, keeping the first.
    pub async fn unspent(&self, address: &str) -> Result<Vec<Utxo>, WocError> {
        let body = self.get(&format!("address/{}/unspent/all", address)).await?;
        let response: UnspentAllResponse = serde_json::from_str(&body)?;

        if !response.error.is_empty() {
            return Err(WocError::ApiError(response.error));
        }

        let utxos = response
            .result
            .into_iter()
            .enumerate()
            .filter_map(|(i, u)| {
                if u.is_spent_in_mempool_tx {
                    tracing::debug!(
                        n = i + 1,
                        txid = %u.tx_hash,
                        vout = u.tx_pos,
                        value = u.value,
                        "skipped, spent in mempool"
                    );
                    return None;
                }
                tracing::debug!(
                    n = i + 1,
                    status = %u.status,
                    txid = %u.tx_hash,
                    vout = u.tx_pos,
                    value = u.value,
                    "UTXO"
                );
                Some(Utxo::new(u.tx_hash, u.tx_pos, u.value))
            })
            .collect();

        Ok(dedup_utxos(utxos))
    }

    /// Raw hex of the transaction `txid`.
    pub async fn raw_transaction(&self, txid: &str) -> Result<String, WocError> {
        let body = self.get(&format!("tx/{}/hex", txid)).await?;
        Ok(body.trim().to_string())
    }

    /// GET `{base}/v1/bsv/{net}/{path}` and return the body text.
    async fn get(&self, path: &str) -> Result<String, WocError> {
        let url = format!(
            "{}/v1/bsv/{}/{}",
            self.config.base_url,
            self.config.network.short_name(),
            path
        );
        tracing::debug!(%url, "fetching from WhatsOnChain");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(WocError::NotFound);
        }

        if status.as_u16() != 200 {
            let message = resp.text().await.unwrap_or_default();
            return Err(WocError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(resp.text().await?)
    }
}

impl UtxoProvider for WocClient {
    type Error = WocError;

    async fn unspent(&self, address: &Address) -> Result<Vec<Utxo>, WocError> {
        WocClient::unspent(self, &address.to_string()).await
    }
}

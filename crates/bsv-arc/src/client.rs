//! ARC HTTP client for broadcasting and querying transactions.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::ArcError;
use crate::types::{ArcConfig, BroadcastRequest, BroadcastResponse, ErrorResponse, TxStatusResponse};

/// HTTP client for the ARC API.
#[derive(Debug, Clone)]
pub struct ArcClient {
    /// Client configuration.
    config: ArcConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl ArcClient {
    /// Create a new ARC client with the given configuration.
    pub fn new(mut config: ArcConfig) -> Result<Self, ArcError> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(Self::build_headers(&config))
            .build()?;
        Ok(Self { config, client })
    }

    /// The configuration in use.
    pub fn config(&self) -> &ArcConfig {
        &self.config
    }

    /// Submit a raw transaction (hex) to ARC.
    pub async fn broadcast(&self, raw_tx_hex: &str) -> Result<BroadcastResponse, ArcError> {
        let url = format!("{}/v1/tx", self.config.base_url);
        tracing::debug!(%url, bytes = raw_tx_hex.len() / 2, "broadcasting transaction");

        let resp = self
            .client
            .post(&url)
            .json(&BroadcastRequest { raw_tx: raw_tx_hex.to_string() })
            .send()
            .await?;

        Self::decode(resp).await
    }

    /// Query the status of a transaction by txid.
    pub async fn status(&self, txid: &str) -> Result<TxStatusResponse, ArcError> {
        let url = format!("{}/v1/tx/{}", self.config.base_url, txid);
        tracing::debug!(%url, "querying transaction status");

        let resp = self.client.get(&url).send().await?;
        Self::decode(resp).await
    }

    /// Decode a success body, or turn an error body into [`ArcError`].
    ///
    /// 200 and 201 are success.
    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ArcError> {
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        if status != 200 && status != 201 {
            return Err(match serde_json::from_slice::<ErrorResponse>(&body) {
                Ok(err) if !err.error.is_empty() => ArcError::Api {
                    status,
                    code: err.code,
                    message: err.error,
                },
                Ok(_) => ArcError::HttpStatus { status, detail: None },
                Err(e) => ArcError::HttpStatus { status, detail: Some(e.to_string()) },
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Headers sent with every request.
    fn build_headers(config: &ArcConfig) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(ref key) = config.api_key {
            if !key.is_empty() {
                if let Ok(val) = HeaderValue::from_str(&format!("Bearer {key}")) {
                    headers.insert(AUTHORIZATION, val);
                }
            }
        }

        headers
    }
}

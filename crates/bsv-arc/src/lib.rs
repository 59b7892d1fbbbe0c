#![deny(missing_docs)]

//! # bsv-arc
//!
//! ARC (Authoritative Response Component) HTTP client for broadcasting
//! BSV transactions and querying their status.
//!
//! Transactions are submitted as JSON (`{"rawTx": "<hex>"}`) to
//! `{base}/v1/tx` and looked up at `{base}/v1/tx/{txid}`.
//! [`monitor::monitor`] polls a transaction until it reaches a final
//! state.
//!
//! # Example
//!
//! ```no_run
//! use bsv_arc::{ArcClient, ArcConfig};
//!
//! # async fn run() -> Result<(), bsv_arc::ArcError> {
//! let client = ArcClient::new(ArcConfig {
//!     base_url: "https://arc.taal.com".to_string(),
//!     api_key: Some("my-key".to_string()),
//!     ..Default::default()
//! })?;
//! let resp = client.broadcast("0100000000000000000000").await?;
//! println!("{} {}", resp.txid, resp.tx_status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod monitor;
pub mod types;


pub use client::ArcClient;
pub use error::ArcError;
pub use monitor::{monitor, PollEvent};
pub use types::{ArcConfig, BroadcastResponse, TxStatus, TxStatusResponse};

#![deny(missing_docs)]

//! # bsv-woc
//!
//! WhatsOnChain client for the two lookups the tools need: the unspent
//! outputs of an address and the raw hex of a transaction.
//!
//! [`WocClient`] implements [`bsv_carve::UtxoProvider`]. Outputs already
//! spent in the mempool and duplicate `(txid, vout)` entries are removed
//! here, so coin selection always sees a clean set.
//!
//! # Example
//!
//! ```no_run
//! use bsv_primitives::Network;
//! use bsv_woc::{WocClient, WocConfig};
//!
//! # async fn example() -> Result<(), bsv_woc::WocError> {
//! let client = WocClient::new(WocConfig::for_network(Network::Testnet))?;
//! let raw = client.raw_transaction("4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b").await?;
//! println!("{}", raw);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::WocClient;
pub use error::WocError;
pub use types::{UnspentAllResponse, WocConfig, WocUnspent};

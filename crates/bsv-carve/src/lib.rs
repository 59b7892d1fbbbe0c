#![deny(missing_docs)]

//! # bsv-carve
//!
//! Builds and signs a P2PKH transaction that spends the coins of a single
//! key. Every satoshi is accounted for: inputs always equal outputs plus
//! the fee, and any nonzero change gets its own output.
//!
//! The pieces are usable on their own:
//!
//! - [`fee::estimate_fee`] sizes a transaction from its input/output counts.
//! - [`select::select`] picks the fewest coins, largest first, that cover
//!   an amount plus fee.
//! - [`assemble::build`] lays out payment and change outputs and signs.
//! - [`carve`] wires a [`UtxoProvider`] to the three.
//!
//! ```no_run
//! use bsv_carve::{build, CarveOptions, Utxo};
//! use bsv_primitives::ec::PrivateKey;
//! use bsv_primitives::Network;
//!
//! let wif = PrivateKey::from_wif("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn").unwrap();
//! let source = bsv_carve::source_address(&wif, Network::Mainnet);
//! let utxos = vec![Utxo::new("aa".repeat(32), 0, 50_000)];
//! let options = CarveOptions { amount: 10_000, ..Default::default() };
//! let carved = build(&wif, &source, "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr", &utxos, &options).unwrap();
//! println!("{}", carved.transaction.to_hex());
//! ```

pub mod assemble;
pub mod carve;
pub mod error;
pub mod fee;
pub mod select;
pub mod utxo;


pub use assemble::{build, CarveOptions, CarvedTransaction};
pub use carve::{carve, parse_wif, source_address};
pub use error::CarveError;
pub use fee::estimate_fee;
pub use select::select;
pub use utxo::{dedup_utxos, Utxo, UtxoProvider};

//! Transaction building, signing and serialization.
//!
//! Implements the legacy wire format (version, inputs, outputs, locktime),
//! transaction ids, the BIP-143 style FORKID signature hash, and a P2PKH
//! signing template.

pub mod input;
pub mod output;
pub mod sighash;
pub mod template;
pub mod transaction;

mod error;
pub use error::TransactionError;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use transaction::Transaction;

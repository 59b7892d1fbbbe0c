//! Script handling for the BSV tools.
//!
//! Provides the `Script` byte type, the handful of opcodes P2PKH needs,
//! Base58Check P2PKH addresses, and a truncation-tolerant walker over
//! push-data opcodes used to recover public keys from unlocking scripts.

pub mod address;
pub mod opcodes;
pub mod pushdata;
pub mod script;

mod error;
pub use address::Address;
pub use bsv_primitives::Network;
pub use error::ScriptError;
pub use pushdata::{last_public_key_push, walk_pushes, PushWalk};
pub use script::Script;

//! Cryptographic and encoding primitives shared by the BSV command-line tools.
//!
//! - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
//! - Base58Check encoding for addresses and WIF keys
//! - VarInt and little-endian wire codec (`BsvReader` / `BsvWriter`)
//! - secp256k1 private/public keys with WIF import and export
//! - Network selection (mainnet / testnet) and its version bytes

pub mod base58;
pub mod ec;
pub mod hash;
pub mod network;
pub mod util;

mod error;
pub use error::PrimitivesError;
pub use network::Network;

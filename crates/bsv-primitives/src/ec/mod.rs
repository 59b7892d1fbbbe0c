//! secp256k1 keys: private keys with WIF import/export and ECDSA signing,
//! public keys with SEC1 serialization and Hash160.

pub mod private_key;
pub mod public_key;

pub use private_key::{DecodedWif, PrivateKey};
pub use public_key::PublicKey;

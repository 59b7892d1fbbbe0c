//! Hash functions used for transaction ids, signature digests and addresses.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Double SHA-256, the hash behind transaction ids and checksums.
///
/// # Arguments
/// * `data` - Bytes to hash.
///
/// # Returns
/// `SHA-256(SHA-256(data))` in internal (not display) byte order.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160 of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// Hash160 = RIPEMD-160(SHA-256(data)), the public key hash of a P2PKH address.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Render a 32-byte hash in display order (byte-reversed hex).
///
/// Transaction ids are computed in internal order but always shown reversed.
pub fn to_display_hex(hash: &[u8; 32]) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

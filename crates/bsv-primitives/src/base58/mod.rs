//! Base58Check encoding for addresses and WIF keys.
//!
//! Payloads carry a trailing 4-byte checksum: the first four bytes of
//! SHA-256d over the version byte and body.

use crate::hash::sha256d;
use crate::PrimitivesError;

const CHECKSUM_LEN: usize = 4;

/// Append a checksum to `payload` and Base58-encode the result.
pub fn check_encode(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(buf).into_string()
}

/// Decode a Base58Check string and verify its checksum.
///
/// # Arguments
/// * `s` - The encoded string.
///
/// # Returns
/// The payload without its checksum, or an error for bad characters,
/// short input or a checksum mismatch.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let mut decoded = bs58::decode(s)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))?;
    if decoded.len() <= CHECKSUM_LEN {
        return Err(PrimitivesError::InvalidBase58(format!(
            "decoded length {} too short",
            decoded.len()
        )));
    }
    let body_len = decoded.len() - CHECKSUM_LEN;
    let expected = sha256d(&decoded[..body_len]);
    if expected[..CHECKSUM_LEN] != decoded[body_len..] {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    decoded.truncate(body_len);
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_round_trip() {
        let payload = [0x00u8, 1, 2, 3, 4, 5];
        let encoded = check_encode(&payload);
        assert!(encoded.starts_with('1'));
        assert_eq!(check_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_known_address_decodes() {
        let body = check_decode("1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr").unwrap();
        assert_eq!(body.len(), 21);
        assert_eq!(body[0], 0x00);
        assert_eq!(hex::encode(&body[1..]), "8fe80c75c9560e8b56ed64ea3c26e18d2c52211b");
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let err = check_decode("1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMs").unwrap_err();
        assert!(matches!(err, PrimitivesError::ChecksumMismatch));
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(matches!(
            check_decode("0OIl"),
            Err(PrimitivesError::InvalidBase58(_))
        ));
    }
}

//! secp256k1 public key with SEC1 serialization.

use std::fmt;

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature as EcdsaSignature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::hash::hash160;
use crate::PrimitivesError;

/// Compressed SEC1 length: prefix byte plus the X coordinate.
pub const COMPRESSED_LEN: usize = 33;

/// Uncompressed SEC1 length: `0x04` plus X and Y.
pub const UNCOMPRESSED_LEN: usize = 65;

/// A secp256k1 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a compressed (33-byte) or uncompressed (65-byte) SEC1 key.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded point.
    ///
    /// # Returns
    /// `InvalidPublicKey` when the bytes are empty or not a curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey("public key is empty".into()));
        }
        let inner = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    pub(crate) fn from_verifying_key(inner: VerifyingKey) -> Self {
        PublicKey { inner }
    }

    /// SEC1 bytes in the requested form.
    pub fn serialize(&self, compressed: bool) -> Vec<u8> {
        self.inner.to_encoded_point(compressed).as_bytes().to_vec()
    }

    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(self.inner.to_encoded_point(true).as_bytes());
        out
    }

    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(self.inner.to_encoded_point(false).as_bytes());
        out
    }

    /// Compressed form as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Hash160 of the serialized key; the two forms give different addresses.
    pub fn hash160(&self, compressed: bool) -> [u8; 20] {
        hash160(&self.serialize(compressed))
    }

    /// Check a DER signature over a 32-byte digest.
    ///
    /// Malformed DER is reported as a failed verification.
    pub fn verify_digest(&self, digest: &[u8; 32], der: &[u8]) -> bool {
        match EcdsaSignature::from_der(der) {
            Ok(sig) => self.inner.verify_prehash(digest, &sig).is_ok(),
            Err(_) => false,
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::PrivateKey;

    const GENERATOR_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_generator_point_serialization() {
        let key = PrivateKey::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        let pk = key.pub_key();
        assert_eq!(pk.to_hex(), GENERATOR_COMPRESSED);
        assert_eq!(pk.to_uncompressed()[0], 0x04);
        assert_eq!(hex::encode(pk.hash160(true)), "751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(hex::encode(pk.hash160(false)), "91b24bf9f5288532960ac687abb035127b1d28a5");
    }

    #[test]
    fn test_compressed_and_uncompressed_parse_to_same_key() {
        let pk = PublicKey::from_hex(GENERATOR_COMPRESSED).unwrap();
        let again = PublicKey::from_bytes(&pk.to_uncompressed()).unwrap();
        assert_eq!(pk, again);
        assert_eq!(pk.serialize(false).len(), UNCOMPRESSED_LEN);
        assert_eq!(pk.serialize(true).len(), COMPRESSED_LEN);
    }

    #[test]
    fn test_invalid_points_rejected() {
        assert!(PublicKey::from_bytes(&[]).is_err());
        assert!(PublicKey::from_bytes(&[0x05; 33]).is_err());
        assert!(PublicKey::from_hex("0279be").is_err());
    }

    #[test]
    fn test_verify_rejects_garbage_der() {
        let pk = PublicKey::from_hex(GENERATOR_COMPRESSED).unwrap();
        assert!(!pk.verify_digest(&[0u8; 32], &[0x30, 0x01]));
    }

    #[test]
    fn test_display_is_compressed_hex() {
        let pk = PublicKey::from_hex(GENERATOR_COMPRESSED).unwrap();
        assert_eq!(pk.to_string(), GENERATOR_COMPRESSED);
    }
}

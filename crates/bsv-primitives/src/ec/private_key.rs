//! secp256k1 private key with WIF encoding and digest signing.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature as EcdsaSignature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::network::Network;
use crate::PrimitivesError;

/// Length of a raw private key scalar.
const PRIVATE_KEY_LEN: usize = 32;

/// Trailing marker in a WIF payload meaning "use the compressed public key".
const COMPRESS_MAGIC: u8 = 0x01;

/// A secp256k1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

/// Everything a WIF string encodes besides the scalar itself.
#[derive(Clone, Debug)]
pub struct DecodedWif {
    pub key: PrivateKey,
    pub network: Network,
    pub compressed: bool,
}

impl PrivateKey {
    /// Generate a fresh key from the OS random number generator.
    pub fn generate() -> Self {
        PrivateKey { inner: SigningKey::random(&mut OsRng) }
    }

    /// Build a key from a 32-byte big-endian scalar.
    ///
    /// # Arguments
    /// * `bytes` - Exactly 32 bytes; zero and values at or above the curve
    ///   order are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_LEN,
                bytes.len()
            )));
        }
        let inner = SigningKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner })
    }

    /// Build a key from 64 hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey("private key hex is empty".into()));
        }
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    /// Decode a WIF string.
    ///
    /// The network comes from the version byte (`0x80` mainnet, `0xef`
    /// testnet) and compression from the optional trailing `0x01`.
    ///
    /// # Arguments
    /// * `wif` - Base58Check string, 51 or 52 characters.
    ///
    /// # Returns
    /// The key with its network and compression flag, or `InvalidWif` /
    /// `ChecksumMismatch` for malformed input.
    pub fn from_wif(wif: &str) -> Result<DecodedWif, PrimitivesError> {
        let payload = base58::check_decode(wif.trim()).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => e,
            other => PrimitivesError::InvalidWif(other.to_string()),
        })?;

        let compressed = match payload.len() {
            34 if payload[33] == COMPRESS_MAGIC => true,
            34 => {
                return Err(PrimitivesError::InvalidWif(format!(
                    "invalid compression flag 0x{:02x}",
                    payload[33]
                )))
            }
            33 => false,
            n => return Err(PrimitivesError::InvalidWif(format!("invalid payload length {}", n))),
        };

        let network = Network::from_wif_prefix(payload[0])
            .map_err(|e| PrimitivesError::InvalidWif(e.to_string()))?;
        let key = Self::from_bytes(&payload[1..1 + PRIVATE_KEY_LEN])?;

        Ok(DecodedWif { key, network, compressed })
    }

    /// Encode as WIF for `network`, flagging compression when requested.
    pub fn to_wif(&self, network: Network, compressed: bool) -> String {
        let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_LEN + 1);
        payload.push(network.wif_prefix());
        payload.extend_from_slice(&self.to_bytes());
        if compressed {
            payload.push(COMPRESS_MAGIC);
        }
        base58::check_encode(&payload)
    }

    /// The 32-byte scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_bytes().into()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// The matching public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(VerifyingKey::from(&self.inner))
    }

    /// Sign a 32-byte digest with RFC 6979 nonces.
    ///
    /// # Arguments
    /// * `digest` - Already-hashed message, e.g. a transaction sighash.
    ///
    /// # Returns
    /// The low-S normalized signature in DER encoding.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<Vec<u8>, PrimitivesError> {
        let sig: EcdsaSignature = self
            .inner
            .sign_prehash(digest)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        let sig = sig.normalize_s().unwrap_or(sig);
        Ok(sig.to_der().as_bytes().to_vec())
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey").field("pub_key", &self.pub_key().to_hex()).finish()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

//! P2PKH addresses.
//!
//! An address is a Base58Check string over a network version byte and the
//! 20-byte Hash160 of a public key.

use std::fmt;
use std::str::FromStr;

use bsv_primitives::base58;
use bsv_primitives::ec::PublicKey;
use bsv_primitives::{Network, PrimitivesError};

use crate::pushdata::last_public_key_push;
use crate::script::Script;
use crate::ScriptError;

/// Version byte plus 20-byte hash.
const ADDRESS_PAYLOAD_LEN: usize = 21;

/// A P2PKH address on mainnet or testnet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    pub address_string: String,
    pub public_key_hash: [u8; 20],
    pub network: Network,
}

impl Address {
    /// Parse and validate a Base58Check address.
    ///
    /// # Arguments
    /// * `addr` - The address text; the network comes from its version byte.
    ///
    /// # Returns
    /// `InvalidAddress` for bad characters, `InvalidAddressLength` for a
    /// wrong payload size, `EncodingChecksumFailed` for a bad checksum and
    /// `UnsupportedAddress` for anything but mainnet/testnet P2PKH.
    pub fn from_string(addr: &str) -> Result<Self, ScriptError> {
        let payload = base58::check_decode(addr).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => ScriptError::EncodingChecksumFailed,
            other => ScriptError::InvalidAddress(format!("'{}': {}", addr, other)),
        })?;

        if payload.len() != ADDRESS_PAYLOAD_LEN {
            return Err(ScriptError::InvalidAddressLength(addr.to_string()));
        }

        let network = Network::from_address_version(payload[0])
            .map_err(|_| ScriptError::UnsupportedAddress(addr.to_string()))?;

        let mut public_key_hash = [0u8; 20];
        public_key_hash.copy_from_slice(&payload[1..]);

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash,
            network,
        })
    }

    /// Encode a public key hash for `network`.
    pub fn from_public_key_hash(hash: &[u8; 20], network: Network) -> Self {
        let mut payload = Vec::with_capacity(ADDRESS_PAYLOAD_LEN);
        payload.push(network.address_version());
        payload.extend_from_slice(hash);

        Address {
            address_string: base58::check_encode(&payload),
            public_key_hash: *hash,
            network,
        }
    }

    /// Address of a public key in its compressed or uncompressed form.
    pub fn from_public_key(key: &PublicKey, compressed: bool, network: Network) -> Self {
        Self::from_public_key_hash(&key.hash160(compressed), network)
    }

    /// Address for a hex-encoded SEC1 public key.
    pub fn from_public_key_string(
        pub_key_hex: &str,
        network: Network,
    ) -> Result<Self, ScriptError> {
        let bytes = hex::decode(pub_key_hex)?;
        Ok(Self::from_public_key_hash(&bsv_primitives::hash::hash160(&bytes), network))
    }

    /// Recover the address a P2PKH locking script pays to.
    pub fn from_locking_script(script: &Script, network: Network) -> Option<Self> {
        script
            .p2pkh_public_key_hash()
            .map(|pkh| Self::from_public_key_hash(&pkh, network))
    }

    /// Recover the spender's address from a P2PKH unlocking script.
    ///
    /// Uses the last key-sized push; the address follows the form the key
    /// was pushed in. `None` when there is no such push or it is not a
    /// valid curve point.
    pub fn from_unlocking_script(script: &Script, network: Network) -> Option<Self> {
        let candidate = last_public_key_push(script.to_bytes())?;
        let key = PublicKey::from_bytes(candidate).ok()?;
        Some(Self::from_public_key(&key, candidate.len() == 33, network))
    }
}

impl FromStr for Address {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_string(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}

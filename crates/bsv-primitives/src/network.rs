//! BSV network selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PrimitivesError;

/// The chain a key or address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Pick the network from a `--testnet` style flag.
    pub fn from_testnet_flag(testnet: bool) -> Self {
        if testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Version byte prepended to a P2PKH public key hash.
    pub fn address_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Version byte prepended to a WIF-encoded private key.
    pub fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }

    /// Resolve a P2PKH address version byte.
    pub fn from_address_version(version: u8) -> Result<Self, PrimitivesError> {
        match version {
            0x00 => Ok(Network::Mainnet),
            0x6f => Ok(Network::Testnet),
            other => Err(PrimitivesError::UnknownNetwork(other)),
        }
    }

    /// Resolve a WIF version byte.
    pub fn from_wif_prefix(prefix: u8) -> Result<Self, PrimitivesError> {
        match prefix {
            0x80 => Ok(Network::Mainnet),
            0xef => Ok(Network::Testnet),
            other => Err(PrimitivesError::UnknownNetwork(other)),
        }
    }

    /// Path segment used by WhatsOnChain style APIs (`main` / `test`).
    pub fn short_name(self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

//! Key generation and WIF inspection behind `keygen` and `wifinfo`.

use std::fmt::Write;

use bsv_pick::{Palette, Renderer};
use bsv_primitives::ec::PrivateKey;
use bsv_primitives::{Network, PrimitivesError};
use bsv_script::Address;
use serde::Serialize;

/// Largest batch `keygen` will produce.
pub const MAX_KEYS: u32 = 100;

#[derive(Debug, thiserror::Error)]
#[error("count must be between 1 and 100")]
pub struct CountOutOfRange;

/// A freshly generated key with everything needed to fund and spend it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub private_key: String,
    pub public_key: String,
    pub wif: String,
    pub address: String,
    pub network: Network,
    pub compressed: bool,
}

impl KeyPair {
    /// Describe `key` for `network` in compressed or uncompressed form.
    pub fn from_key(key: &PrivateKey, network: Network, compressed: bool) -> Self {
        let public = key.pub_key();
        Self {
            private_key: key.to_hex(),
            public_key: hex::encode(public.serialize(compressed)),
            wif: key.to_wif(network, compressed),
            address: Address::from_public_key(&public, compressed, network).to_string(),
            network,
            compressed,
        }
    }
}

/// Generate `count` independent key pairs.
pub fn generate(
    count: u32,
    network: Network,
    compressed: bool,
) -> Result<Vec<KeyPair>, CountOutOfRange> {
    if !(1..=MAX_KEYS).contains(&count) {
        return Err(CountOutOfRange);
    }
    Ok((0..count)
        .map(|_| KeyPair::from_key(&PrivateKey::generate(), network, compressed))
        .collect())
}

/// Human-readable listing of generated keys.
pub fn render_key_pairs(pairs: &[KeyPair]) -> String {
    let mut out = String::from("\n=== BSV Key Generator ===\n\n");
    for (i, kp) in pairs.iter().enumerate() {
        if pairs.len() > 1 {
            let _ = writeln!(out, "Key #{}:", i + 1);
        }
        let _ = writeln!(out, "Network: {}", kp.network);
        let _ = writeln!(out, "Private Key (hex): {}", kp.private_key);
        let _ = writeln!(out, "Public Key (hex): {}", kp.public_key);
        let _ = writeln!(out, "WIF: {}", kp.wif);
        let _ = writeln!(out, "Address: {}", kp.address);
        let _ = writeln!(out, "Compressed: {}", kp.compressed);
        if i + 1 < pairs.len() {
            out.push_str("---\n");
        }
    }
    out.push_str("\nKeep your private keys secure!\n");
    out
}

/// A compressed form and, on request, the uncompressed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forms {
    pub compressed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncompressed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifInput {
    pub wif: String,
    pub network: Network,
    pub compressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkForms {
    pub wif: Forms,
    pub address: Forms,
}

/// Everything derivable from one WIF, for both networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifInfo {
    pub input: WifInput,
    pub public_key: Forms,
    pub mainnet: NetworkForms,
    pub testnet: NetworkForms,
}

impl WifInfo {
    /// Decode `wif` and derive its keys, WIFs and addresses.
    ///
    /// Uncompressed variants are only filled in when `with_uncompressed`
    /// is set.
    pub fn from_wif(wif: &str, with_uncompressed: bool) -> Result<Self, PrimitivesError> {
        let decoded = PrivateKey::from_wif(wif)?;
        let key = &decoded.key;
        let public = key.pub_key();

        let optional = |value: String| with_uncompressed.then_some(value);
        let address = |compressed: bool, network: Network| {
            Address::from_public_key(&public, compressed, network).to_string()
        };
        let network_forms = |network: Network| NetworkForms {
            wif: Forms {
                compressed: key.to_wif(network, true),
                uncompressed: optional(key.to_wif(network, false)),
            },
            address: Forms {
                compressed: address(true, network),
                uncompressed: optional(address(false, network)),
            },
        };

        Ok(Self {
            input: WifInput {
                wif: wif.trim().to_string(),
                network: decoded.network,
                compressed: decoded.compressed,
            },
            public_key: Forms {
                compressed: hex::encode(public.to_compressed()),
                uncompressed: optional(hex::encode(public.to_uncompressed())),
            },
            mainnet: network_forms(Network::Mainnet),
            testnet: network_forms(Network::Testnet),
        })
    }

    pub fn render(&self, color: bool) -> String {
        const LINE: &str = "────────────────────────────────────────────────────────────────────────";
        let r = Renderer::new(color);
        let dim = |s: &str| r.paint(Palette::DIM, s);
        let green = |s: &str| r.paint(Palette::GREEN, s);

        let mut out = String::new();
        let _ = writeln!(out, "{}", r.paint(Palette::WHITE, LINE));
        let _ = writeln!(out, "{} {}", dim("Input WIF:"), green(&self.input.wif));
        let _ = writeln!(out, "{}  {}", dim("Network:"), green(&self.input.network.to_string()));
        let compressed = if self.input.compressed { "yes" } else { "no" };
        let _ = writeln!(out, "{} {}", dim("Compressed:"), green(compressed));

        let _ = writeln!(out, "\n{}", dim("Public Key:"));
        let _ = writeln!(out, "  {} {}", dim("Compressed:"), green(&self.public_key.compressed));
        if let Some(key) = &self.public_key.uncompressed {
            let _ = writeln!(out, "  {} {}", dim("Uncompressed:"), green(key));
        }

        for (title, forms) in [("MAINNET", &self.mainnet), ("TESTNET", &self.testnet)] {
            let _ = writeln!(out, "\n{}", r.paint(Palette::WHITE, title));
            let _ = writeln!(out, "  {} {}", dim("WIF:"), green(&forms.wif.compressed));
            let _ = writeln!(out, "  {} {}", dim("Address:"), green(&forms.address.compressed));
            if let Some(wif) = &forms.wif.uncompressed {
                let _ = writeln!(out, "  {} {}", dim("WIF (uncompressed):"), green(wif));
            }
            if let Some(address) = &forms.address.uncompressed {
                let _ = writeln!(out, "  {} {}", dim("Address (uncompressed):"), green(address));
            }
        }
        let _ = writeln!(out, "{}", r.paint(Palette::WHITE, LINE));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Private key 1.
    const KEY_ONE_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const KEY_ONE_WIF: &str = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
    const KEY_ONE_WIF_UNCOMPRESSED: &str = "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf";
    const KEY_ONE_PUBKEY: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const KEY_ONE_ADDRESS: &str = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";
    const KEY_ONE_ADDRESS_UNCOMPRESSED: &str = "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm";

    #[test]
    fn test_key_pair_from_known_key() {
        let key = PrivateKey::from_hex(KEY_ONE_HEX).unwrap();
        let kp = KeyPair::from_key(&key, Network::Mainnet, true);
        assert_eq!(kp.private_key, KEY_ONE_HEX);
        assert_eq!(kp.public_key, KEY_ONE_PUBKEY);
        assert_eq!(kp.wif, KEY_ONE_WIF);
        assert_eq!(kp.address, KEY_ONE_ADDRESS);

        let kp = KeyPair::from_key(&key, Network::Mainnet, false);
        assert_eq!(kp.public_key.len(), 130);
        assert_eq!(kp.wif, KEY_ONE_WIF_UNCOMPRESSED);
        assert_eq!(kp.address, KEY_ONE_ADDRESS_UNCOMPRESSED);
    }

    #[test]
    fn test_generate_count_bounds() {
        assert!(generate(0, Network::Mainnet, true).is_err());
        assert!(generate(MAX_KEYS + 1, Network::Mainnet, true).is_err());

        let pairs = generate(3, Network::Testnet, true).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_ne!(pairs[0].private_key, pairs[1].private_key);
        for kp in &pairs {
            let decoded = PrivateKey::from_wif(&kp.wif).unwrap();
            assert_eq!(decoded.network, Network::Testnet);
            assert!(decoded.compressed);
            assert!(kp.address.starts_with('m') || kp.address.starts_with('n'));
        }
    }

    #[test]
    fn test_key_pair_json_shape() {
        let key = PrivateKey::from_hex(KEY_ONE_HEX).unwrap();
        let json = serde_json::to_value(KeyPair::from_key(&key, Network::Testnet, true)).unwrap();
        assert_eq!(json["network"], "testnet");
        assert_eq!(json["compressed"], true);
        assert!(json.get("privateKey").is_some());
        assert!(json.get("publicKey").is_some());
    }

    #[test]
    fn test_render_key_pairs() {
        let key = PrivateKey::from_hex(KEY_ONE_HEX).unwrap();
        let one = KeyPair::from_key(&key, Network::Mainnet, true);

        let single = render_key_pairs(std::slice::from_ref(&one));
        assert!(single.starts_with("\n=== BSV Key Generator ===\n\n"));
        assert!(!single.contains("Key #1:"));
        assert!(single.contains(&format!("Address: {}\n", KEY_ONE_ADDRESS)));
        assert!(single.ends_with("\nKeep your private keys secure!\n"));

        let double = render_key_pairs(&[one.clone(), one]);
        assert!(double.contains("Key #1:\n"));
        assert!(double.contains("---\nKey #2:\n"));
    }

    #[test]
    fn test_wif_info_both_networks() {
        let info = WifInfo::from_wif(KEY_ONE_WIF, false).unwrap();
        assert_eq!(info.input.network, Network::Mainnet);
        assert!(info.input.compressed);
        assert_eq!(info.public_key.compressed, KEY_ONE_PUBKEY);
        assert_eq!(info.public_key.uncompressed, None);
        assert_eq!(info.mainnet.wif.compressed, KEY_ONE_WIF);
        assert_eq!(info.mainnet.address.compressed, KEY_ONE_ADDRESS);

        let testnet = PrivateKey::from_wif(&info.testnet.wif.compressed).unwrap();
        assert_eq!(testnet.network, Network::Testnet);
        assert_eq!(testnet.key.to_hex(), KEY_ONE_HEX);
    }

    #[test]
    fn test_wif_info_uncompressed_input() {
        let info = WifInfo::from_wif(KEY_ONE_WIF_UNCOMPRESSED, true).unwrap();
        assert!(!info.input.compressed);
        assert_eq!(info.mainnet.wif.compressed, KEY_ONE_WIF);
        assert_eq!(info.mainnet.wif.uncompressed.as_deref(), Some(KEY_ONE_WIF_UNCOMPRESSED));
        assert_eq!(
            info.mainnet.address.uncompressed.as_deref(),
            Some(KEY_ONE_ADDRESS_UNCOMPRESSED)
        );
        assert_eq!(info.public_key.uncompressed.as_ref().map(String::len), Some(130));
    }

    #[test]
    fn test_wif_info_rejects_garbage() {
        assert!(WifInfo::from_wif("not-a-wif", false).is_err());
    }

    #[test]
    fn test_wif_info_json_omits_uncompressed() {
        let info = WifInfo::from_wif(KEY_ONE_WIF, false).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["input"]["network"], "mainnet");
        assert!(json["public_key"].get("uncompressed").is_none());
        assert_eq!(json["mainnet"]["address"]["compressed"], KEY_ONE_ADDRESS);
    }

    #[test]
    fn test_wif_info_render_plain() {
        let text = WifInfo::from_wif(KEY_ONE_WIF, false).unwrap().render(false);
        assert!(text.contains(&format!("Input WIF: {}\n", KEY_ONE_WIF)));
        assert!(text.contains("Network:  mainnet\n"));
        assert!(text.contains("Compressed: yes\n"));
        assert!(text.contains("\nMAINNET\n"));
        assert!(text.contains("\nTESTNET\n"));
        assert!(!text.contains('\x1b'));
        assert!(!text.contains("(uncompressed)"));
    }
}

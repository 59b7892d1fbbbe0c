use proptest::prelude::*;

use bsv_primitives::ec::PrivateKey;
use bsv_primitives::hash::sha256;
use bsv_primitives::util::{BsvReader, BsvWriter, VarInt};
use bsv_primitives::Network;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn wif_preserves_key_network_and_compression(
        seed in prop::array::uniform32(any::<u8>()),
        testnet in any::<bool>(),
        compressed in any::<bool>(),
    ) {
        // Not every 32-byte string is a valid scalar.
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let network = Network::from_testnet_flag(testnet);
            let decoded = PrivateKey::from_wif(&key.to_wif(network, compressed)).unwrap();
            prop_assert_eq!(decoded.key.to_hex(), key.to_hex());
            prop_assert_eq!(decoded.network, network);
            prop_assert_eq!(decoded.compressed, compressed);
        }
    }

    #[test]
    fn signatures_verify_under_own_key(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let digest = sha256(&msg);
            let der = key.sign_digest(&digest).unwrap();
            prop_assert!(key.pub_key().verify_digest(&digest, &der));
        }
    }

    #[test]
    fn varint_reads_back_what_was_written(value in any::<u64>(), tail in prop::collection::vec(any::<u8>(), 0..8)) {
        let mut w = BsvWriter::new();
        w.write_varint(VarInt(value));
        w.write_bytes(&tail);
        let bytes = w.into_bytes();
        let mut r = BsvReader::new(&bytes);
        prop_assert_eq!(r.read_varint().unwrap().value(), value);
        prop_assert_eq!(r.remaining(), tail.len());
    }
}

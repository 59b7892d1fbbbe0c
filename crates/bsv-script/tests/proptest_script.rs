use proptest::prelude::*;

use bsv_script::{walk_pushes, Address, Network, Script};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn script_hex_roundtrip(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let script = Script::from_bytes(&data);
        let script2 = Script::from_hex(&script.to_hex()).unwrap();
        prop_assert_eq!(script.to_bytes(), script2.to_bytes());
    }

    /// The walker never panics, and every push it reports lies inside the script.
    #[test]
    fn push_walk_stays_in_bounds(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let walk = walk_pushes(&data);
        let total: usize = walk.pushes.iter().map(|p| p.len()).sum();
        prop_assert!(total <= data.len());
    }

    /// Pushes written with `append_push_data` (up to PUSHDATA1 size) are read back in order.
    #[test]
    fn appended_pushes_are_walked(chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..=255), 0..6)) {
        let mut script = Script::new();
        for chunk in &chunks {
            script.append_push_data(chunk).unwrap();
        }
        let walk = walk_pushes(script.to_bytes());
        prop_assert!(!walk.truncated);
        prop_assert_eq!(walk.pushes.len(), chunks.len());
        for (got, want) in walk.pushes.iter().zip(chunks.iter()) {
            prop_assert_eq!(*got, &want[..]);
        }
    }

    #[test]
    fn address_hash_roundtrip(hash in prop::array::uniform20(any::<u8>()), testnet in any::<bool>()) {
        let network = Network::from_testnet_flag(testnet);
        let addr = Address::from_public_key_hash(&hash, network);
        let parsed = Address::from_string(&addr.address_string).unwrap();
        prop_assert_eq!(parsed.public_key_hash, hash);
        prop_assert_eq!(parsed.network, network);
    }
}

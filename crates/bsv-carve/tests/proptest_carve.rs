use proptest::prelude::*;

use bsv_carve::fee::MIN_FEE;
use bsv_carve::{build, estimate_fee, parse_wif, select, source_address, CarveError, CarveOptions, Utxo};
use bsv_primitives::Network;

const WIF: &str = "cNGwGSc7KRrTmdLUZ54fiSXWbhLNDc2Eg5zNucgQxyQCzuQ5YRDq";
const DESTINATION: &str = "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr";

fn arb_utxos() -> impl Strategy<Value = Vec<Utxo>> {
    prop::collection::vec(1u64..5_000_000, 1..8).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Utxo::new(hex::encode([i as u8 + 1; 32]), i as u32, v))
            .collect()
    })
}

proptest! {
    #[test]
    fn fee_never_below_floor(inputs in 0usize..1000, outputs in 0usize..1000, rate in 0u64..100_000) {
        prop_assert!(estimate_fee(inputs, outputs, rate) >= MIN_FEE);
    }

    #[test]
    fn fee_monotonic_in_inputs(inputs in 0usize..1000, outputs in 0usize..100, rate in 0u64..100_000) {
        prop_assert!(estimate_fee(inputs + 1, outputs, rate) >= estimate_fee(inputs, outputs, rate));
    }

    #[test]
    fn selection_covers_target_minimally(utxos in arb_utxos(), target in 1u64..10_000_000, rate in 0u64..2000) {
        match select(&utxos, target, rate) {
            Ok(selected) => {
                let k = selected.len();
                let total: u64 = selected.iter().map(|u| u.satoshis).sum();
                prop_assert!(total >= target + estimate_fee(k, 2, rate));
                // dropping the smallest chosen coin no longer covers
                let without_last: u64 = selected[..k - 1].iter().map(|u| u.satoshis).sum();
                prop_assert!(k == 1 || without_last < target + estimate_fee(k - 1, 2, rate));
                prop_assert!(selected.windows(2).all(|w| w[0].satoshis >= w[1].satoshis));
            }
            Err(CarveError::InsufficientFunds { available, .. }) => {
                prop_assert_eq!(available, utxos.iter().map(|u| u.satoshis).sum::<u64>());
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn selection_is_deterministic(utxos in arb_utxos(), target in 1u64..1_000_000) {
        let a = select(&utxos, target, 100).ok();
        let b = select(&utxos, target, 100).ok();
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn build_conserves_value(
        utxos in arb_utxos(),
        amount in 0u64..3_000_000,
        split in 1u32..6,
        rate in 0u64..1500,
    ) {
        let wif = parse_wif(WIF).unwrap();
        let source = source_address(&wif, Network::Testnet);
        let split = if amount == 0 { 1 } else { split };
        let options = CarveOptions { amount, split, fee_per_kb: rate };

        match build(&wif, &source, DESTINATION, &utxos, &options) {
            Ok(carved) => {
                let tx = &carved.transaction;
                prop_assert_eq!(carved.total_input, tx.total_output_satoshis() + carved.fee);
                prop_assert!(carved.fee >= MIN_FEE);
                prop_assert!(tx.outputs.iter().all(|o| o.satoshis > 0 || amount < u64::from(split)));
                if amount > 0 {
                    let paid: u64 = tx.outputs[..split as usize].iter().map(|o| o.satoshis).sum();
                    prop_assert_eq!(paid, amount);
                }
            }
            Err(CarveError::InsufficientFunds { available, target, fee }) => {
                prop_assert!(available <= target + fee);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }
}

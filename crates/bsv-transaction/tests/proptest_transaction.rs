use proptest::prelude::*;

use bsv_script::Script;
use bsv_transaction::{Transaction, TransactionInput, TransactionOutput};

fn arb_input() -> impl Strategy<Value = TransactionInput> {
    (
        prop::array::uniform32(any::<u8>()),
        any::<u32>(),
        prop::collection::vec(any::<u8>(), 0..120),
        any::<u32>(),
    )
        .prop_map(|(txid, vout, script, seq)| TransactionInput {
            source_txid: txid,
            source_tx_out_index: vout,
            unlocking_script: Script::from_bytes(&script),
            sequence_number: seq,
            source_output: None,
        })
}

fn arb_output() -> impl Strategy<Value = TransactionOutput> {
    (any::<u64>(), prop::collection::vec(any::<u8>(), 0..80))
        .prop_map(|(sats, script)| TransactionOutput::new(sats, Script::from_bytes(&script)))
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        any::<u32>(),
        prop::collection::vec(arb_input(), 0..6),
        prop::collection::vec(arb_output(), 0..6),
        any::<u32>(),
    )
        .prop_map(|(version, inputs, outputs, lock_time)| Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
}

proptest! {
    #[test]
    fn parse_inverts_serialize(tx in arb_transaction()) {
        let bytes = tx.to_bytes();
        let parsed = Transaction::from_bytes(&bytes).unwrap();
        prop_assert_eq!(&parsed, &tx);
        prop_assert_eq!(parsed.tx_id(), tx.tx_id());
    }

    #[test]
    fn truncation_never_panics(tx in arb_transaction(), cut in any::<prop::sample::Index>()) {
        let bytes = tx.to_bytes();
        let end = cut.index(bytes.len());
        prop_assert!(Transaction::from_bytes(&bytes[..end]).is_err());
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = Transaction::from_bytes(&bytes);
    }
}

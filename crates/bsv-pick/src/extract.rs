//! Field extraction from serialized transactions.

use bsv_transaction::Transaction;

use crate::error::PickError;
use crate::selector::FieldSelector;

/// Extract every selected field from raw transaction bytes.
///
/// Returns one hex string per selector in canonical order (see
/// [`FieldSelector::rank`]). Fails as a whole: if any selector is out of
/// range nothing is returned.
pub fn extract(raw: &[u8], selectors: &[FieldSelector]) -> Result<Vec<String>, PickError> {
    if selectors.is_empty() {
        return Err(PickError::NoSelectorSpecified);
    }
    let tx = Transaction::from_bytes(raw)
        .map_err(|e| PickError::MalformedTransaction(e.to_string()))?;
    tracing::debug!(
        inputs = tx.inputs.len(),
        outputs = tx.outputs.len(),
        selectors = selectors.len(),
        "parsed transaction"
    );

    FieldSelector::canonical_order(selectors)
        .iter()
        .map(|sel| extract_field(&tx, *sel))
        .collect()
}

/// [`extract`] over a hex-encoded transaction.
pub fn extract_hex(raw_hex: &str, selectors: &[FieldSelector]) -> Result<Vec<String>, PickError> {
    if selectors.is_empty() {
        return Err(PickError::NoSelectorSpecified);
    }
    let raw = hex::decode(raw_hex)
        .map_err(|e| {
            PickError::MalformedTransaction(format!("input is not a valid hex string: {}", e))
        })?;
    extract(&raw, selectors)
}

/// Hex encoding of one field of a parsed transaction.
pub fn extract_field(tx: &Transaction, selector: FieldSelector) -> Result<String, PickError> {
    let field = match selector {
        FieldSelector::Version => hex::encode(tx.version.to_le_bytes()),
        FieldSelector::TxId => tx.tx_id_hex(),
        FieldSelector::Locktime => hex::encode(tx.lock_time.to_le_bytes()),

        FieldSelector::Output(i) => hex::encode(output(tx, i)?.to_bytes()),
        FieldSelector::OutputScript(i) => output(tx, i)?.locking_script.to_hex(),
        FieldSelector::OutputValue(i) => hex::encode(output(tx, i)?.satoshis.to_le_bytes()),

        FieldSelector::Input(i) => hex::encode(input(tx, i)?.to_bytes()),
        FieldSelector::InputScript(i) => input(tx, i)?.unlocking_script.to_hex(),
        FieldSelector::InputPrevTxid(i) => input(tx, i)?.source_txid_hex(),
        FieldSelector::InputPrevOut(i) => {
            hex::encode(input(tx, i)?.source_tx_out_index.to_le_bytes())
        }
        FieldSelector::InputSequence(i) => hex::encode(input(tx, i)?.sequence_number.to_le_bytes()),
    };
    Ok(field)
}

fn output(
    tx: &Transaction,
    index: usize,
) -> Result<&bsv_transaction::TransactionOutput, PickError> {
    tx.outputs.get(index).ok_or(PickError::IndexOutOfRange {
        kind: "output",
        index,
        count: tx.outputs.len(),
    })
}

fn input(tx: &Transaction, index: usize) -> Result<&bsv_transaction::TransactionInput, PickError> {
    tx.inputs.get(index).ok_or(PickError::IndexOutOfRange {
        kind: "input",
        index,
        count: tx.inputs.len(),
    })
}

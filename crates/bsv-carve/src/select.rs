//! Largest-first coin selection.

use crate::error::CarveError;
use crate::fee::estimate_fee;
use crate::utxo::Utxo;

/// Outputs budgeted while selecting: the payment and a change output.
const SELECTION_OUTPUTS: usize = 2;

/// Pick the fewest UTXOs, largest first, whose total covers `target` plus
/// the fee for spending them into two outputs.
///
/// Sorting is stable, so equal values keep their input order. `utxos` is
/// not modified.
pub fn select(utxos: &[Utxo], target: u64, fee_per_kb: u64) -> Result<Vec<Utxo>, CarveError> {
    if utxos.is_empty() {
        return Err(CarveError::NoUtxosAvailable);
    }

    let mut sorted = utxos.to_vec();
    sorted.sort_by(|a, b| b.satoshis.cmp(&a.satoshis));

    let mut total: u64 = 0;
    let mut fee = 0;
    for (idx, utxo) in sorted.iter().enumerate() {
        total = total.saturating_add(utxo.satoshis);
        let count = idx + 1;
        fee = estimate_fee(count, SELECTION_OUTPUTS, fee_per_kb);
        if total >= target.saturating_add(fee) {
            tracing::debug!(count, total, target, fee, "selected UTXOs");
            sorted.truncate(count);
            return Ok(sorted);
        }
    }

    Err(CarveError::InsufficientFunds { available: total, target, fee })
}

//! Transaction assembly: inputs, split payment outputs, change, signing.

use bsv_primitives::ec::DecodedWif;
use bsv_script::Address;
use bsv_transaction::template::p2pkh;
use bsv_transaction::{Transaction, TransactionOutput};

use crate::error::CarveError;
use crate::fee::assembly_fee;
use crate::utxo::Utxo;

/// What to send and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarveOptions {
    /// Satoshis to pay the destination; zero sends everything.
    pub amount: u64,
    /// Number of equal payment outputs.
    pub split: u32,
    /// Fee rate in satoshis per 1000 bytes.
    pub fee_per_kb: u64,
}

impl Default for CarveOptions {
    fn default() -> Self {
        Self { amount: 0, split: 1, fee_per_kb: 100 }
    }
}

impl CarveOptions {
    /// Whether every selected coin goes to the destination.
    pub fn is_send_all(&self) -> bool {
        self.amount == 0
    }

    /// Reject option combinations that cannot produce a transaction.
    pub fn validate(&self) -> Result<(), CarveError> {
        if self.split < 1 {
            return Err(CarveError::InvalidSelectorCombination(
                "--split must be at least 1".into(),
            ));
        }
        if self.split > 1 && self.is_send_all() {
            return Err(CarveError::InvalidSelectorCombination(
                "--split requires a specific amount (--sats), cannot be used with send-all mode"
                    .into(),
            ));
        }
        Ok(())
    }
}

/// A signed transaction with its accounting.
#[derive(Debug, Clone)]
pub struct CarvedTransaction {
    /// The signed transaction.
    pub transaction: Transaction,
    /// Sum of the spent coins.
    pub total_input: u64,
    /// Fee left to miners.
    pub fee: u64,
    /// Value of the change output, zero when there is none.
    pub change: u64,
}

/// Build and sign a transaction spending all of `utxos` from `source`.
///
/// With a nonzero amount, `split` outputs pay the destination and any
/// change returns to `source`. With amount zero the destination receives
/// everything but the fee in a single output.
pub fn build(
    wif: &DecodedWif,
    source: &Address,
    destination: &str,
    utxos: &[Utxo],
    options: &CarveOptions,
) -> Result<CarvedTransaction, CarveError> {
    options.validate()?;
    if utxos.is_empty() {
        return Err(CarveError::NoUtxosAvailable);
    }

    let dest = Address::from_string(destination)
        .map_err(|e| CarveError::InvalidAddress(e.to_string()))?;
    let source_lock = p2pkh::lock(source);
    let dest_lock = p2pkh::lock(&dest);

    let mut tx = Transaction::new();
    let mut total_input: u64 = 0;
    for utxo in utxos {
        tx.add_input_from(&utxo.txid, utxo.vout, source_lock.clone(), utxo.satoshis)
            .map_err(|e| CarveError::ProviderError(format!("bad UTXO {}: {}", utxo, e)))?;
        total_input = total_input.checked_add(utxo.satoshis).ok_or_else(|| {
            CarveError::ProviderError("UTXO values overflow u64".into())
        })?;
    }
    tracing::debug!(inputs = utxos.len(), total_input, "added inputs");

    let payment_outputs = if options.is_send_all() { 0 } else { options.split as usize };
    let fee = assembly_fee(tx.inputs.len(), payment_outputs, options.fee_per_kb);
    let insufficient = || CarveError::InsufficientFunds {
        available: total_input,
        target: options.amount,
        fee,
    };
    let change = total_input
        .checked_sub(options.amount)
        .and_then(|rest| rest.checked_sub(fee))
        .ok_or_else(insufficient)?;

    if !options.is_send_all() {
        let split = u64::from(options.split);
        let per_output = options.amount / split;
        let remainder = options.amount % split;
        for i in 0..split {
            let value = if i == split - 1 { per_output + remainder } else { per_output };
            tracing::debug!(output = i + 1, to = %dest, value, "payment output");
            tx.add_output(TransactionOutput::new(value, dest_lock.clone()));
        }
        if remainder > 0 {
            tracing::debug!(remainder, "remainder added to last output");
        }
    }

    if change > 0 {
        let (to, lock) = if options.is_send_all() {
            (&dest, dest_lock)
        } else {
            (source, source_lock)
        };
        tracing::debug!(%to, change, fee, "change output");
        tx.add_output(TransactionOutput::change(change, lock));
    } else if options.is_send_all() {
        return Err(insufficient());
    }

    let unlocker = if wif.compressed {
        p2pkh::unlock(wif.key.clone(), None)
    } else {
        p2pkh::unlock(wif.key.clone(), None).uncompressed()
    };
    tx.sign_all(&unlocker)
        .map_err(|e| CarveError::SigningFailed(e.to_string()))?;

    debug_assert_eq!(total_input, tx.total_output_satoshis() + fee);
    tracing::debug!(txid = %tx.tx_id_hex(), "signed transaction");

    Ok(CarvedTransaction { transaction: tx, total_input, fee, change })
}

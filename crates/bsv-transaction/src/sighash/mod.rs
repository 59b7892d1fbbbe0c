//! Signature hash computation.
//!
//! BSV signs with the BIP-143 digest plus the FORKID flag for replay
//! protection. The preimage commits to the value being spent, so signing
//! needs the source output of every input.
//!
//! See <https://github.com/bitcoin-sv/bitcoin-sv/blob/master/doc/abc/replay-protected-sighash.md#digest-algorithm>

use bsv_primitives::hash::sha256d;
use bsv_primitives::util::BsvWriter;

use crate::transaction::Transaction;
use crate::TransactionError;

pub const SIGHASH_ALL: u32 = 0x01;
pub const SIGHASH_NONE: u32 = 0x02;
pub const SIGHASH_SINGLE: u32 = 0x03;
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;
pub const SIGHASH_FORKID: u32 = 0x40;

/// The standard BSV sighash type: ALL | FORKID (`0x41`).
pub const SIGHASH_ALL_FORKID: u32 = SIGHASH_ALL | SIGHASH_FORKID;

const SIGHASH_MASK: u32 = 0x1f;

/// Double SHA-256 of the preimage for `input_index`.
pub fn signature_hash(
    tx: &Transaction,
    input_index: usize,
    prev_output_script: &[u8],
    sighash_type: u32,
    satoshis: u64,
) -> Result<[u8; 32], TransactionError> {
    let preimage = calc_preimage(tx, input_index, prev_output_script, sighash_type, satoshis)?;
    Ok(sha256d(&preimage))
}

/// Build the BIP-143 preimage.
///
/// Layout: version, hashPrevouts, hashSequence, outpoint, scriptCode,
/// value, nSequence, hashOutputs, locktime, sighash type.
///
/// # Arguments
/// * `tx` - The transaction being signed.
/// * `input_index` - Input whose signature is being produced.
/// * `prev_output_script` - Locking script of the output being spent.
/// * `sighash_type` - Combined flags, normally `SIGHASH_ALL_FORKID`.
/// * `satoshis` - Value of the output being spent.
pub fn calc_preimage(
    tx: &Transaction,
    input_index: usize,
    prev_output_script: &[u8],
    sighash_type: u32,
    satoshis: u64,
) -> Result<Vec<u8>, TransactionError> {
    let input = tx.inputs.get(input_index).ok_or_else(|| {
        TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        ))
    })?;

    let anyone_can_pay = sighash_type & SIGHASH_ANYONECANPAY != 0;
    let base_type = sighash_type & SIGHASH_MASK;
    let signs_all_outputs = base_type != SIGHASH_SINGLE && base_type != SIGHASH_NONE;

    let hash_prevouts = if anyone_can_pay { [0u8; 32] } else { prevouts_hash(tx) };
    let hash_sequence = if !anyone_can_pay && signs_all_outputs {
        sequence_hash(tx)
    } else {
        [0u8; 32]
    };
    let hash_outputs = if signs_all_outputs {
        outputs_hash(tx, None)
    } else if base_type == SIGHASH_SINGLE && input_index < tx.outputs.len() {
        outputs_hash(tx, Some(input_index))
    } else {
        [0u8; 32]
    };

    let mut writer = BsvWriter::with_capacity(160 + prev_output_script.len());
    writer.write_u32_le(tx.version);
    writer.write_bytes(&hash_prevouts);
    writer.write_bytes(&hash_sequence);
    writer.write_bytes(&input.source_txid);
    writer.write_u32_le(input.source_tx_out_index);
    writer.write_var_bytes(prev_output_script);
    writer.write_u64_le(satoshis);
    writer.write_u32_le(input.sequence_number);
    writer.write_bytes(&hash_outputs);
    writer.write_u32_le(tx.lock_time);
    writer.write_u32_le(sighash_type);
    Ok(writer.into_bytes())
}

fn prevouts_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = BsvWriter::with_capacity(tx.inputs.len() * 36);
    for input in &tx.inputs {
        writer.write_bytes(&input.source_txid);
        writer.write_u32_le(input.source_tx_out_index);
    }
    sha256d(writer.as_bytes())
}

fn sequence_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = BsvWriter::with_capacity(tx.inputs.len() * 4);
    for input in &tx.inputs {
        writer.write_u32_le(input.sequence_number);
    }
    sha256d(writer.as_bytes())
}

/// All outputs, or only the one at `single` for SIGHASH_SINGLE.
fn outputs_hash(tx: &Transaction, single: Option<usize>) -> [u8; 32] {
    let mut writer = BsvWriter::new();
    match single {
        Some(idx) => tx.outputs[idx].write_to(&mut writer),
        None => tx.outputs.iter().for_each(|o| o.write_to(&mut writer)),
    }
    sha256d(writer.as_bytes())
}

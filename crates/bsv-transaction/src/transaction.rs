//! The transaction type and its legacy wire serialization.

use std::fmt;

use bsv_primitives::hash::{sha256d, to_display_hex};
use bsv_primitives::util::{BsvReader, BsvWriter, VarInt};
use bsv_primitives::PrimitivesError;
use bsv_script::Script;

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::sighash;
use crate::template::UnlockingScriptTemplate;
use crate::TransactionError;

/// Smallest possible serialized input: outpoint, empty script, sequence.
const MIN_INPUT_LEN: usize = 41;
/// Smallest possible serialized output: value and empty script.
const MIN_OUTPUT_LEN: usize = 9;

/// Attach context to a wire decoding failure.
pub(crate) fn wire_err(what: &'static str) -> impl Fn(PrimitivesError) -> TransactionError {
    move |e| TransactionError::SerializationError(format!("{}: {}", what, e))
}

/// A BSV transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// An empty version-1 transaction with locktime 0.
    pub fn new() -> Self {
        Transaction {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| TransactionError::SerializationError(format!("invalid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Parse a complete transaction; trailing bytes are an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = BsvReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::SerializationError(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    /// Parse a transaction from the front of `reader`.
    ///
    /// Element counts are checked against the bytes left before anything
    /// is allocated, so a corrupt count fails fast.
    pub fn read_from(reader: &mut BsvReader) -> Result<Self, TransactionError> {
        let version = reader.read_u32_le().map_err(wire_err("reading version"))?;

        let input_count = read_count(reader, MIN_INPUT_LEN, "input")?;
        let mut inputs = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            inputs.push(TransactionInput::read_from(reader)?);
        }

        let output_count = read_count(reader, MIN_OUTPUT_LEN, "output")?;
        let mut outputs = Vec::with_capacity(output_count);
        for _ in 0..output_count {
            outputs.push(TransactionOutput::read_from(reader)?);
        }

        let lock_time = reader.read_u32_le().map_err(wire_err("reading lock time"))?;

        Ok(Transaction { version, inputs, outputs, lock_time })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    pub fn to_bytes(&self) -> Vec<u8> {
        let capacity = 10 + self.inputs.len() * 148 + self.outputs.len() * 34;
        let mut writer = BsvWriter::with_capacity(capacity);
        writer.write_u32_le(self.version);

        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(&mut writer);
        }

        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(&mut writer);
        }

        writer.write_u32_le(self.lock_time);
        writer.into_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn size(&self) -> usize {
        self.to_bytes().len()
    }

    // -----------------------------------------------------------------
    // Transaction ID
    // -----------------------------------------------------------------

    /// Double SHA-256 of the serialization, internal byte order.
    pub fn tx_id(&self) -> [u8; 32] {
        sha256d(&self.to_bytes())
    }

    /// The transaction id as shown by explorers and APIs.
    pub fn tx_id_hex(&self) -> String {
        to_display_hex(&self.tx_id())
    }

    // -----------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------

    pub fn add_input(&mut self, input: TransactionInput) {
        self.inputs.push(input);
    }

    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    /// Add an input spending `txid_hex:vout`, recording the spent output.
    ///
    /// # Arguments
    /// * `txid_hex` - Display-order id of the transaction being spent.
    /// * `vout` - Output index being spent.
    /// * `locking_script` - Locking script of the spent output.
    /// * `satoshis` - Value of the spent output.
    pub fn add_input_from(
        &mut self,
        txid_hex: &str,
        vout: u32,
        locking_script: Script,
        satoshis: u64,
    ) -> Result<(), TransactionError> {
        let mut input = TransactionInput::from_outpoint(txid_hex, vout)?;
        input.source_output = Some(TransactionOutput::new(satoshis, locking_script));
        self.inputs.push(input);
        Ok(())
    }

    pub fn total_output_satoshis(&self) -> u64 {
        self.outputs.iter().map(|o| o.satoshis).sum()
    }

    /// Sum of the spent outputs; every input must carry its source output.
    pub fn total_input_satoshis(&self) -> Result<u64, TransactionError> {
        self.inputs.iter().enumerate().try_fold(0u64, |total, (idx, input)| {
            let sats = input.source_satoshis().ok_or_else(|| {
                TransactionError::InvalidTransaction(format!("input {} has no source output", idx))
            })?;
            total.checked_add(sats).ok_or_else(|| {
                TransactionError::InvalidTransaction("input total overflows u64".into())
            })
        })
    }

    // -----------------------------------------------------------------
    // Signing
    // -----------------------------------------------------------------

    /// Signature hash for `input_index` against its recorded source output.
    pub fn calc_input_signature_hash(
        &self,
        input_index: usize,
        sighash_flag: u32,
    ) -> Result<[u8; 32], TransactionError> {
        let input = self.inputs.get(input_index).ok_or_else(|| {
            TransactionError::InvalidTransaction(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index,
                self.inputs.len()
            ))
        })?;
        let source = input.source_output.as_ref().ok_or_else(|| {
            TransactionError::SigningError(format!("input {} has no source output", input_index))
        })?;

        sighash::signature_hash(
            self,
            input_index,
            source.locking_script.to_bytes(),
            sighash_flag,
            source.satoshis,
        )
    }

    /// Produce an unlocking script for every input with `template`.
    ///
    /// All-or-nothing: on error the caller should discard the transaction.
    pub fn sign_all<T>(&mut self, template: &T) -> Result<(), TransactionError>
    where
        T: UnlockingScriptTemplate + ?Sized,
    {
        for idx in 0..self.inputs.len() {
            let script = template.sign(self, idx as u32)?;
            self.inputs[idx].unlocking_script = script;
        }
        Ok(())
    }
}

/// Read an element count and bound it by what the remaining bytes can hold.
fn read_count(
    reader: &mut BsvReader,
    min_len: usize,
    what: &str,
) -> Result<usize, TransactionError> {
    let count = reader
        .read_varint()
        .map_err(|e| {
            TransactionError::SerializationError(format!("reading {} count: {}", what, e))
        })?
        .value();
    let max = (reader.remaining() / min_len) as u64;
    if count > max {
        return Err(TransactionError::SerializationError(format!(
            "{} count {} exceeds remaining data",
            what, count
        )));
    }
    Ok(count as usize)
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

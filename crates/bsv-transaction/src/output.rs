//! Transaction output: a satoshi value and a locking script.

use bsv_primitives::util::{BsvReader, BsvWriter};
use bsv_script::Script;

use crate::transaction::wire_err;
use crate::TransactionError;

/// An output of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionOutput {
    pub satoshis: u64,
    pub locking_script: Script,
    /// Marks the output that returns leftover value. Not serialized.
    pub change: bool,
}

impl TransactionOutput {
    pub fn new(satoshis: u64, locking_script: Script) -> Self {
        TransactionOutput { satoshis, locking_script, change: false }
    }

    /// A change output paying `satoshis` to `locking_script`.
    pub fn change(satoshis: u64, locking_script: Script) -> Self {
        TransactionOutput { satoshis, locking_script, change: true }
    }

    /// Decode one output: 8-byte LE value, then a length-prefixed script.
    pub fn read_from(reader: &mut BsvReader) -> Result<Self, TransactionError> {
        let satoshis = reader.read_u64_le().map_err(wire_err("reading satoshis"))?;
        let script = reader.read_var_bytes().map_err(wire_err("reading locking script"))?;
        Ok(TransactionOutput::new(satoshis, Script::from_bytes(script)))
    }

    pub fn write_to(&self, writer: &mut BsvWriter) {
        writer.write_u64_le(self.satoshis);
        writer.write_var_bytes(self.locking_script.to_bytes());
    }

    /// The output exactly as it appears on the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BsvWriter::with_capacity(9 + self.locking_script.len());
        self.write_to(&mut writer);
        writer.into_bytes()
    }
}

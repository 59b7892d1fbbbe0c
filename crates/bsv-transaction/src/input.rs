//! Transaction input: an outpoint, its unlocking script and sequence.
//!
//! The output being spent is attached as `source_output` while building so
//! the input can be signed; it is never part of the serialized form.

use bsv_primitives::hash::to_display_hex;
use bsv_primitives::util::{BsvReader, BsvWriter};
use bsv_script::Script;

use crate::output::TransactionOutput;
use crate::transaction::wire_err;
use crate::TransactionError;

/// Final sequence number; disables locktime for the input.
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// An input of a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// Id of the transaction being spent, in internal (wire) byte order.
    pub source_txid: [u8; 32],
    pub source_tx_out_index: u32,
    /// Empty until signed.
    pub unlocking_script: Script,
    pub sequence_number: u32,
    /// The output being spent, needed to sign.
    pub source_output: Option<TransactionOutput>,
}

impl TransactionInput {
    /// Spend output `vout` of the transaction with display-order id `txid_hex`.
    ///
    /// # Arguments
    /// * `txid_hex` - 64 hex characters as shown by explorers (byte-reversed).
    /// * `vout` - Output index within that transaction.
    pub fn from_outpoint(txid_hex: &str, vout: u32) -> Result<Self, TransactionError> {
        let bytes = hex::decode(txid_hex).map_err(|e| {
            TransactionError::InvalidTransaction(format!("invalid txid '{}': {}", txid_hex, e))
        })?;
        let mut source_txid: [u8; 32] = bytes.try_into().map_err(|_| {
            TransactionError::InvalidTransaction(format!("txid '{}' is not 32 bytes", txid_hex))
        })?;
        source_txid.reverse();

        Ok(TransactionInput {
            source_txid,
            source_tx_out_index: vout,
            unlocking_script: Script::new(),
            sequence_number: DEFAULT_SEQUENCE_NUMBER,
            source_output: None,
        })
    }

    /// The spent transaction id in display order.
    pub fn source_txid_hex(&self) -> String {
        to_display_hex(&self.source_txid)
    }

    /// Decode one input from the wire.
    pub fn read_from(reader: &mut BsvReader) -> Result<Self, TransactionError> {
        let source_txid = reader.read_array::<32>().map_err(wire_err("reading source txid"))?;
        let source_tx_out_index = reader.read_u32_le().map_err(wire_err("reading output index"))?;
        let script = reader.read_var_bytes().map_err(wire_err("reading unlocking script"))?;
        let sequence_number = reader.read_u32_le().map_err(wire_err("reading sequence number"))?;

        Ok(TransactionInput {
            source_txid,
            source_tx_out_index,
            unlocking_script: Script::from_bytes(script),
            sequence_number,
            source_output: None,
        })
    }

    pub fn write_to(&self, writer: &mut BsvWriter) {
        writer.write_bytes(&self.source_txid);
        writer.write_u32_le(self.source_tx_out_index);
        writer.write_var_bytes(self.unlocking_script.to_bytes());
        writer.write_u32_le(self.sequence_number);
    }

    /// The input exactly as it appears on the wire, unlocking script included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BsvWriter::with_capacity(41 + self.unlocking_script.len());
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    pub fn source_satoshis(&self) -> Option<u64> {
        self.source_output.as_ref().map(|o| o.satoshis)
    }
}

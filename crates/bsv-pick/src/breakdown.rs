//! A structured, display-ready view of a transaction.

use bsv_primitives::Network;
use bsv_script::Address;
use bsv_transaction::Transaction;

use crate::error::PickError;

/// Locktimes below this are block heights, at or above it Unix timestamps.
pub const LOCKTIME_THRESHOLD: u32 = 500_000_000;

const SATS_PER_BSV: u64 = 100_000_000;

/// How a transaction's locktime is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockTime {
    /// Locktime zero.
    NotLocked,
    /// Final from this block height on.
    BlockHeight(u32),
    /// Final from this Unix time on.
    Timestamp(u32),
}

impl LockTime {
    /// Classify a raw `nLockTime` against [`LOCKTIME_THRESHOLD`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::NotLocked,
            h if h < LOCKTIME_THRESHOLD => Self::BlockHeight(h),
            t => Self::Timestamp(t),
        }
    }

    /// The value as it appears on the wire.
    pub fn raw(&self) -> u32 {
        match *self {
            Self::NotLocked => 0,
            Self::BlockHeight(v) | Self::Timestamp(v) => v,
        }
    }

    /// Human-readable explanation of the lock.
    pub fn describe(&self) -> String {
        match self {
            Self::NotLocked => "Not locked".to_string(),
            Self::BlockHeight(h) => format!("Locked until block height {}", h),
            Self::Timestamp(t) => format!("Locked until Unix timestamp {}", t),
        }
    }
}

/// One input as shown by the pretty printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    /// Spent txid in display order.
    pub prev_txid: String,
    /// Spent output index.
    pub prev_vout: u32,
    /// Unlocking script as hex.
    pub script_hex: String,
    /// Unlocking script length in bytes.
    pub script_len: usize,
    /// Spender address recovered from a pushed public key.
    pub address: Option<String>,
    /// Sequence number.
    pub sequence: u32,
}

/// One output as shown by the pretty printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputView {
    /// Value in satoshis.
    pub satoshis: u64,
    /// Locking script as hex.
    pub script_hex: String,
    /// Locking script length in bytes.
    pub script_len: usize,
    /// Recipient address when the script is P2PKH.
    pub address: Option<String>,
}

impl OutputView {
    /// The value in BSV with all eight decimals.
    pub fn bsv(&self) -> String {
        format!("{}.{:08}", self.satoshis / SATS_PER_BSV, self.satoshis % SATS_PER_BSV)
    }
}

/// Everything the pretty printer shows about a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxBreakdown {
    /// Transaction id in display order.
    pub txid: String,
    /// Transaction version.
    pub version: u32,
    /// Inputs in wire order.
    pub inputs: Vec<InputView>,
    /// Outputs in wire order.
    pub outputs: Vec<OutputView>,
    /// Interpreted `nLockTime`.
    pub lock_time: LockTime,
}

impl TxBreakdown {
    /// Break down `tx`, encoding any recovered addresses for `network`.
    pub fn new(tx: &Transaction, network: Network) -> Self {
        let inputs = tx
            .inputs
            .iter()
            .map(|input| InputView {
                prev_txid: input.source_txid_hex(),
                prev_vout: input.source_tx_out_index,
                script_hex: input.unlocking_script.to_hex(),
                script_len: input.unlocking_script.len(),
                address: Address::from_unlocking_script(&input.unlocking_script, network)
                    .map(|a| a.to_string()),
                sequence: input.sequence_number,
            })
            .collect();

        let outputs = tx
            .outputs
            .iter()
            .map(|output| OutputView {
                satoshis: output.satoshis,
                script_hex: output.locking_script.to_hex(),
                script_len: output.locking_script.len(),
                address: Address::from_locking_script(&output.locking_script, network)
                    .map(|a| a.to_string()),
            })
            .collect();

        TxBreakdown {
            txid: tx.tx_id_hex(),
            version: tx.version,
            inputs,
            outputs,
            lock_time: LockTime::from_raw(tx.lock_time),
        }
    }

    /// Parse and break down a hex-encoded transaction.
    pub fn from_hex(raw_hex: &str, network: Network) -> Result<Self, PickError> {
        let tx = Transaction::from_hex(raw_hex)
            .map_err(|e| PickError::MalformedTransaction(e.to_string()))?;
        Ok(Self::new(&tx, network))
    }
}

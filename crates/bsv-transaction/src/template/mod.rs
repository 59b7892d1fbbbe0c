//! Script templates used to unlock inputs while signing.

pub mod p2pkh;

use bsv_script::Script;

use crate::transaction::Transaction;
use crate::TransactionError;

/// Produces the unlocking script for one input of a transaction.
pub trait UnlockingScriptTemplate {
    /// Sign input `input_index` of `tx`.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed; the input must carry its
    ///   source output.
    /// * `input_index` - The input to unlock.
    ///
    /// # Returns
    /// The unlocking script, or a `SigningError`.
    fn sign(&self, tx: &Transaction, input_index: u32) -> Result<Script, TransactionError>;

    /// Expected unlocking script length, for size estimates before signing.
    fn estimate_length(&self, tx: &Transaction, input_index: u32) -> u32;
}

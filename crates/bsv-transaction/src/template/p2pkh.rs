//! Pay-to-Public-Key-Hash template.
//!
//! Locking: `OP_DUP OP_HASH160 <pkh> OP_EQUALVERIFY OP_CHECKSIG`.
//! Unlocking: `<DER signature || sighash byte> <public key>`.

use bsv_primitives::ec::PrivateKey;
use bsv_script::opcodes::*;
use bsv_script::{Address, Script};

use crate::sighash::SIGHASH_ALL_FORKID;
use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Locking script paying to `address`.
pub fn lock(address: &Address) -> Script {
    let mut bytes = Vec::with_capacity(25);
    bytes.extend_from_slice(&[OP_DUP, OP_HASH160, OP_DATA_20]);
    bytes.extend_from_slice(&address.public_key_hash);
    bytes.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
    Script::from(bytes)
}

/// A signer for inputs locked to `private_key`'s compressed public key.
///
/// `sighash_flag` defaults to `SIGHASH_ALL_FORKID`.
pub fn unlock(private_key: PrivateKey, sighash_flag: Option<u32>) -> P2PKH {
    P2PKH {
        private_key,
        compressed: true,
        sighash_flag: sighash_flag.unwrap_or(SIGHASH_ALL_FORKID),
    }
}

/// P2PKH signing template.
pub struct P2PKH {
    private_key: PrivateKey,
    compressed: bool,
    sighash_flag: u32,
}

impl P2PKH {
    /// Push the uncompressed public key instead, for coins sent to the
    /// uncompressed address of the key.
    pub fn uncompressed(mut self) -> Self {
        self.compressed = false;
        self
    }
}

impl UnlockingScriptTemplate for P2PKH {
    fn sign(&self, tx: &Transaction, input_index: u32) -> Result<Script, TransactionError> {
        let sig_hash = tx
            .calc_input_signature_hash(input_index as usize, self.sighash_flag)
            .map_err(|e| match e {
                TransactionError::InvalidTransaction(msg) => TransactionError::SigningError(msg),
                other => other,
            })?;

        let mut sig = self.private_key.sign_digest(&sig_hash)?;
        sig.push(self.sighash_flag as u8);

        let mut script = Script::new();
        script.append_push_data(&sig)?;
        script.append_push_data(&self.private_key.pub_key().serialize(self.compressed))?;
        Ok(script)
    }

    /// 1 + 72 (DER + flag) + 1 + 33, minus one for the common 71-byte DER.
    fn estimate_length(&self, _tx: &Transaction, _input_index: u32) -> u32 {
        if self.compressed {
            106
        } else {
            138
        }
    }
}

//! Spendable outputs and the provider seam that fetches them.

use std::collections::HashSet;
use std::fmt;
use std::future::Future;

use bsv_script::Address;

/// An unspent output owned by the source address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utxo {
    /// Id of the funding transaction, display-order hex.
    pub txid: String,
    /// Output index within the funding transaction.
    pub vout: u32,
    /// Value in satoshis.
    pub satoshis: u64,
}

impl Utxo {
    /// Create a UTXO reference.
    pub fn new(txid: impl Into<String>, vout: u32, satoshis: u64) -> Self {
        Self { txid: txid.into(), vout, satoshis }
    }
}

impl fmt::Display for Utxo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} = {} satoshis", self.txid, self.vout, self.satoshis)
    }
}

/// A source of spendable outputs for an address.
///
/// Implementations return a clean set: no outputs already spent in the
/// mempool, no zero-value entries, and no duplicate `(txid, vout)` pairs.
/// [`dedup_utxos`] does the last part.
pub trait UtxoProvider {
    /// Error reported by the provider.
    type Error: fmt::Display;

    /// Fetch the unspent outputs of `address`.
    fn unspent(
        &self,
        address: &Address,
    ) -> impl Future<Output = Result<Vec<Utxo>, Self::Error>> + Send;
}

/// Drop zero-value entries and repeated `(txid, vout)` pairs, keeping the
/// first occurrence and the original order.
pub fn dedup_utxos(utxos: Vec<Utxo>) -> Vec<Utxo> {
    let before = utxos.len();
    let mut seen = HashSet::with_capacity(before);
    let deduped: Vec<Utxo> = utxos
        .into_iter()
        .filter(|u| {
            if u.satoshis == 0 {
                tracing::debug!(utxo = %u, "skipping zero-value UTXO");
                return false;
            }
            let fresh = seen.insert((u.txid.clone(), u.vout));
            if !fresh {
                tracing::debug!(txid = %u.txid, vout = u.vout, "skipping duplicate UTXO");
            }
            fresh
        })
        .collect();

    if deduped.len() < before {
        tracing::debug!(removed = before - deduped.len(), "filtered UTXO set");
    }
    deduped
}

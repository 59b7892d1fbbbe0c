//! Error types for transaction carving.

/// Errors that can occur while selecting coins and building a transaction.
#[derive(Debug, thiserror::Error)]
pub enum CarveError {
    /// The source address has no spendable outputs.
    #[error("no UTXOs available")]
    NoUtxosAvailable,

    /// The available coins cannot cover the amount plus fee.
    #[error("insufficient funds: have {available} satoshis, need amount {target} + fee ~{fee}")]
    InsufficientFunds {
        /// Total value of the coins considered.
        available: u64,
        /// Amount requested, zero when sending everything.
        target: u64,
        /// Fee estimated for the attempted spend.
        fee: u64,
    },

    /// The destination or source address could not be parsed.
    #[error("invalid destination address: {0}")]
    InvalidAddress(String),

    /// Options that contradict each other or are out of range.
    #[error("{0}")]
    InvalidSelectorCombination(String),

    /// The UTXO provider failed.
    #[error("failed to fetch UTXOs: {0}")]
    ProviderError(String),

    /// An input could not be signed.
    #[error("failed to sign transaction: {0}")]
    SigningFailed(String),

    /// The signing key could not be decoded.
    #[error("failed to parse WIF: {0}")]
    InvalidKey(String),
}

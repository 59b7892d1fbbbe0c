//! Error types for field extraction.

/// Errors that can occur while picking fields from a transaction.
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    /// No field was requested.
    #[error("no selector specified")]
    NoSelectorSpecified,

    /// An indexed selector points past the end of the inputs or outputs.
    #[error("{kind} index {index} out of range ({})", range_hint(.count))]
    IndexOutOfRange {
        /// `"input"` or `"output"`.
        kind: &'static str,
        /// The requested index.
        index: usize,
        /// How many elements the transaction has.
        count: usize,
    },

    /// The bytes do not parse as a transaction.
    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),

    /// A selector name or index could not be parsed.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

fn range_hint(count: &usize) -> String {
    match *count {
        0 => "transaction has none".to_string(),
        n => format!("0-{}", n - 1),
    }
}

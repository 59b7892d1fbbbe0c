/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction structure is invalid (e.g. an input index out of range).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    /// Signing an input failed (e.g. the spent output is unknown).
    #[error("signing error: {0}")]
    SigningError(String),
    /// Wire decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error("script error: {0}")]
    Script(#[from] bsv_script::ScriptError),
    #[error("primitives error: {0}")]
    Primitives(#[from] bsv_primitives::PrimitivesError),
}

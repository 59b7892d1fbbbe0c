//! Error types for WhatsOnChain operations.

/// Errors that can occur when interacting with the WhatsOnChain API.
#[derive(Debug, thiserror::Error)]
pub enum WocError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("failed to parse response: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Server returned a non-200 response.
    #[error("WhatsOnChain API error (status {status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Response body.
        message: String,
    },

    /// The response carried an error message.
    #[error("API error: {0}")]
    ApiError(String),

    /// Resource not found (404).
    #[error("not found")]
    NotFound,
}

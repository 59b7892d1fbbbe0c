//! Error types for ARC operations.

/// Errors that can occur when interacting with the ARC API.
#[derive(Debug, thiserror::Error)]
pub enum ArcError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// ARC answered with an error document.
    #[error("ARC error: {message} (HTTP {status}, code: {code})")]
    Api {
        /// HTTP status of the response.
        status: u16,
        /// ARC error code.
        code: i64,
        /// Error text reported by ARC.
        message: String,
    },

    /// ARC answered with a non-success status and no usable error text.
    #[error("request failed with HTTP status {status}{}", detail_suffix(.detail))]
    HttpStatus {
        /// HTTP status of the response.
        status: u16,
        /// Why the body could not be used, if it was not simply empty.
        detail: Option<String>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

/// Errors from script construction and address handling.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    #[error("address not supported {0}")]
    UnsupportedAddress(String),

    #[error("encoding checksum failed")]
    EncodingChecksumFailed,

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("push data too big: {0} bytes")]
    DataTooBig(usize),

    #[error("use append_push_data for push opcode 0x{0:02x}")]
    PushOpcode(u8),
}

impl From<hex::FromHexError> for ScriptError {
    fn from(e: hex::FromHexError) -> Self {
        ScriptError::InvalidHex(e.to_string())
    }
}

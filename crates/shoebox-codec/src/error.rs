use thiserror::Error;

/// Errors from encoding or decoding image bytes.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The source could not be read while encoding. Nothing was produced.
    #[error("failed to read source while encoding: {0}")]
    Encode(#[from] std::io::Error),

    /// The encoded data is not valid base64 and cannot be decoded.
    #[error("invalid encoded data: {0}")]
    Decode(String),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

//! Error types for encoding and decoding operations.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Codec error types.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the underlying byte stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A symbol occurred more often than a 32-bit count can hold.
    #[error("input too large: count for symbol {symbol} exceeds u32::MAX")]
    InputTooLarge { symbol: u16 },

    /// Stream header is truncated or impossible.
    #[error("malformed header: {message}")]
    MalformedHeader { message: String },

    /// Bit stream ended before the encoded data was complete.
    #[error("truncated stream after {bytes_written} decoded bytes")]
    TruncatedStream { bytes_written: u64 },

    /// No code matched within the maximum code length.
    #[error("invalid code: no match within {bits} bits")]
    InvalidCode { bits: usize },

    /// Bit index outside a bit array's bounds.
    #[error("bit index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Binary bit-array operation over arrays of different lengths.
    #[error("bit array length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

impl Error {
    /// Create a malformed header error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a truncated stream error.
    pub fn truncated(bytes_written: u64) -> Self {
        Error::TruncatedStream { bytes_written }
    }

    /// Create an I/O error with a custom message.
    pub fn io(message: impl Into<String>) -> Self {
        Error::Io(std::io::Error::other(message.into()))
    }

    /// Get error category for diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io(_) => "io_error",
            Error::InputTooLarge { .. } => "input_too_large",
            Error::MalformedHeader { .. } => "malformed_header",
            Error::TruncatedStream { .. } => "truncated_stream",
            Error::InvalidCode { .. } => "invalid_code",
            Error::OutOfRange { .. } => "out_of_range",
            Error::LengthMismatch { .. } => "length_mismatch",
        }
    }
}

// felica-history/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Arguments to the request builder were rejected. No frame is produced.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The card's answer is too short for the fields it declares.
    #[error("malformed response: expected at least {expected} bytes, got {actual}")]
    MalformedResponse { expected: usize, actual: usize },

    /// Opaque failure reported by the transport, passed through unchanged.
    #[error("transport error: {0}")]
    Transport(String),

    /// A single history record could not be decoded.
    #[error("record {index} could not be decoded: {reason}")]
    RecordDecode { index: usize, reason: String },
}

impl Error {
    /// True for errors that only affect one record of a read.
    pub fn is_per_record(&self) -> bool {
        matches!(self, Error::RecordDecode { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

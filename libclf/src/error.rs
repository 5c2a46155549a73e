// libclf/src/error.rs

//! Error type shared by the whole crate.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The requested bitrate/mode is never supported by the called procedure.
    #[error("{0}")]
    UnsupportedTarget(String),

    /// No frame arrived in time.
    #[error("operation timed out")]
    Timeout,

    /// The link or a received datagram is broken.
    #[error("communication error: {0}")]
    Communication(String),

    /// A frame or payload violates the expected format.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// A payload has the wrong length.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Received length.
        actual: usize,
    },

    /// A payload starts with the wrong code.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Required code.
        expected: u8,
        /// Received code.
        actual: u8,
    },

    /// An NFC-A target asked for a fourth cascade level.
    #[error("excessive uid: cascade bit still set after the third cascade level")]
    ExcessiveUid,

    /// Socket level failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Only `UnsupportedTarget` is surfaced to callers of the sense/listen
    /// procedures; every other failure means "no activated peer".
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::UnsupportedTarget(_))
    }

    pub(crate) fn unsupported_bitrate(brty: crate::types::BitrateType) -> Self {
        Error::UnsupportedTarget(format!("unsupported bitrate {}", brty))
    }
}

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

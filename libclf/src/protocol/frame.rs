// libclf/src/protocol/frame.rs

//! Wire frame.

use crate::types::BitrateType;
use crate::utils::{bytes_to_hex, parse_hex};
use crate::{Error, Result};

/// Logical frame exchanged with a peer: a bitrate/type tag and the payload.
///
/// Wire format is a single ASCII datagram: `"<BRTY> <HEXPAYLOAD>"`, e.g.
/// `"106A 26"`. The payload is lowercase hex on encode and may be empty, in
/// which case the token ends right after the separating space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Bitrate and modulation.
    pub brty: BitrateType,
    /// Frame payload.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Frame of `payload` at `brty`.
    pub fn new(brty: BitrateType, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            brty,
            payload: payload.into(),
        }
    }

    /// True for a frame without payload.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Encode into the wire token.
    pub fn encode(&self) -> Vec<u8> {
        format!("{} {}", self.brty, bytes_to_hex(&self.payload)).into_bytes()
    }

    /// Decode a wire token. Trailing ASCII whitespace is ignored and a token
    /// without a payload part decodes to an empty payload.
    pub fn decode(wire: &[u8]) -> Result<Frame> {
        let text = std::str::from_utf8(wire)
            .map_err(|_| Error::MalformedFrame("frame is not ascii text".into()))?
            .trim_end();

        let (brty, hex) = match text.split_once(' ') {
            Some((brty, hex)) => (brty, hex),
            None => (text, ""),
        };

        let brty: BitrateType = brty.parse()?;
        let payload = parse_hex(hex).map_err(Error::MalformedFrame)?;
        Ok(Frame { brty, payload })
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.brty, bytes_to_hex(&self.payload))
    }
}

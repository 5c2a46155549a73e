// libclf/src/protocol/codec.rs

//! Frame codec entry points.

use crate::Result;
use crate::types::BitrateType;

use super::Frame;
use super::commands::Command;

/// Encode a (brty, payload) pair into its wire token.
pub fn encode_frame(brty: BitrateType, payload: &[u8]) -> Vec<u8> {
    Frame::new(brty, payload).encode()
}

/// Decode a wire token into its (brty, payload) pair.
pub fn decode_frame(wire: &[u8]) -> Result<(BitrateType, Vec<u8>)> {
    let frame = Frame::decode(wire)?;
    Ok((frame.brty, frame.payload))
}

/// Build the frame that carries `cmd` at bitrate `brty`.
pub fn command_frame(brty: BitrateType, cmd: &Command) -> Frame {
    Frame::new(brty, cmd.encode())
}

// libclf/src/protocol/commands/ttf.rs

//! NFC-F commands.

use crate::constants::SENSF_REQ_CMD;
use crate::types::SystemCode;

/// Prefix a SENSF_REQ body with its length byte (body length + 1). The
/// body must not exceed `SENSF_REQ_MAX_BODY` bytes.
pub fn encode_sensf_req(body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + body.len());
    buf.push((body.len() + 1) as u8);
    buf.extend_from_slice(body);
    buf
}

/// Fields of a received SENSF_REQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensfReq {
    /// Requested system code, 0xFF bytes are wildcards.
    pub system_code: SystemCode,
    /// Request code selecting the optional SENSF_RES field.
    pub request_code: u8,
}

/// Recognise a well-formed SENSF_REQ: `06 00 SC SC RC TSN`.
pub fn parse_sensf_req(cmd: &[u8]) -> Option<SensfReq> {
    match cmd {
        [6, SENSF_REQ_CMD, sc0, sc1, rc, _tsn] => Some(SensfReq {
            system_code: SystemCode::from_be_bytes([*sc0, *sc1]),
            request_code: *rc,
        }),
        _ => None,
    }
}

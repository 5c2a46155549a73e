// libclf/src/protocol/commands/ttb.rs

//! NFC-B commands.

use crate::constants::{SENSB_REQ, SENSB_REQ_CMD};

/// SENSB_REQ with AFI 0x00 (all application families) and a single slot.
pub fn encode_sensb_req() -> Vec<u8> {
    SENSB_REQ.to_vec()
}

/// Recognise a SENSB_REQ or ALLB_REQ (any AFI, any PARAM) on the listening
/// side.
pub fn is_sensb_req(cmd: &[u8]) -> bool {
    matches!(cmd, [SENSB_REQ_CMD, _afi, _param])
}

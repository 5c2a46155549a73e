// libclf/src/protocol/commands/tta.rs

//! NFC-A commands.

use crate::constants::{NVB_SDD, NVB_SEL, RID_CMD, SENS_REQ};
use crate::protocol::cascade::CascadeLevel;

/// SENS_REQ is a 7-bit short frame carried as a single byte.
pub fn encode_sens_req() -> Vec<u8> {
    vec![SENS_REQ]
}

/// RID: command code followed by ADD, DATA and four UID echo bytes, all zero.
pub fn encode_rid_cmd() -> Vec<u8> {
    let mut buf = Vec::with_capacity(7);
    buf.push(RID_CMD);
    buf.extend_from_slice(&[0x00; 6]);
    buf
}

/// SDD_REQ for one cascade level: SEL_CMD and NVB 0x20.
pub fn encode_sdd_req(level: CascadeLevel) -> Vec<u8> {
    vec![level.sel_cmd(), NVB_SDD]
}

/// SEL_REQ carrying `uid_cln` verbatim: either the SDD_RES echoed as
/// received, or a known fragment with its BCC already appended.
pub fn encode_sel_req(level: CascadeLevel, uid_cln: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + uid_cln.len());
    buf.push(level.sel_cmd());
    buf.push(NVB_SEL);
    buf.extend_from_slice(uid_cln);
    buf
}

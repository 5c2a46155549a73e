// libclf/src/protocol/responses/tta.rs

//! NFC-A responses.

use crate::constants::RID_RES_LEN;
use crate::protocol::parser;
use crate::{Error, Result};

/// Decoded SENS_RES (ATQA).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensRes([u8; 2]);

impl SensRes {
    /// Raw two SENS_RES bytes.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// A zero UID size/anticollision field marks a Type 1 (or proprietary)
    /// target that does not take part in the SDD cascade.
    pub fn is_type1(&self) -> bool {
        self.0[0] & 0x1f == 0
    }

    /// Platform configuration `1100b` identifies a Type 1 tag answering RID.
    pub fn supports_rid(&self) -> bool {
        self.0[1] & 0x0f == 0x0c
    }
}

/// SENS_RES is exactly two bytes.
pub fn decode_sens_res(data: &[u8]) -> Result<SensRes> {
    parser::ensure_exact_len(data, 2)?;
    Ok(SensRes([data[0], data[1]]))
}

/// SDD_RES: the 4-byte UID CLn, optionally followed by its BCC. The BCC is
/// not checked; the whole response is echoed in the following SEL_REQ.
pub fn decode_sdd_res(data: &[u8]) -> Result<&[u8]> {
    match data.len() {
        4 | 5 => Ok(data),
        n => Err(Error::InvalidLength {
            expected: 5,
            actual: n,
        }),
    }
}

/// SEL_RES (SAK) is a single byte.
pub fn decode_sel_res(data: &[u8]) -> Result<u8> {
    parser::ensure_exact_len(data, 1)?;
    Ok(data[0])
}

/// RID_RES: HR0, HR1 and the four UID bytes.
pub fn decode_rid_res(data: &[u8]) -> Result<Vec<u8>> {
    parser::ensure_exact_len(data, RID_RES_LEN)?;
    Ok(data.to_vec())
}

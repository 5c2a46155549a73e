// libclf/src/protocol/responses/ttb.rs

//! NFC-B responses.

use crate::constants::{SENSB_RES_CODE, SENSB_RES_LEN};
use crate::protocol::parser;
use crate::Result;

/// Validate a SENSB_RES (ATQB): exactly 12 bytes starting with 0x50.
pub fn decode_sensb_res(data: &[u8]) -> Result<Vec<u8>> {
    parser::ensure_exact_len(data, SENSB_RES_LEN)?;
    parser::expect_response_code(data, SENSB_RES_CODE)?;
    Ok(data.to_vec())
}

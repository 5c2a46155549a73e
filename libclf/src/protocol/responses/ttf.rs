// libclf/src/protocol/responses/ttf.rs

//! NFC-F responses.

use crate::constants::{SENSF_RES_CODE, SENSF_RES_MIN_LEN};
use crate::protocol::parser;
use crate::Result;

/// Validate a SENSF_RES and strip its length byte.
///
/// Layout: length(1) + response code(1) + IDm(8) + PMm(8) + optional
/// request data(2). The length byte must equal the total length.
pub fn decode_sensf_res(data: &[u8]) -> Result<Vec<u8>> {
    parser::ensure_len(data, SENSF_RES_MIN_LEN)?;
    parser::expect_length_byte(data)?;
    parser::expect_byte_at(data, 1, SENSF_RES_CODE)?;
    Ok(data[1..].to_vec())
}

/// Build the SENSF_RES an emulated target sends for `request_code`.
///
/// `identity` is the configured response without length byte (response
/// code, IDm, PMm and optionally 2 bytes of request data). Request code 0
/// answers with the base identity, 1 appends the request data (system
/// code), 2 appends the communication performance field. The length byte
/// is recomputed for whatever is emitted.
pub fn encode_sensf_res(identity: &[u8], request_code: u8, comm_performance: [u8; 2]) -> Vec<u8> {
    let base_len = identity.len().min(SENSF_RES_MIN_LEN - 1);
    let (base, request_data) = identity.split_at(base_len);

    let mut body = base.to_vec();
    match request_code {
        0x01 => body.extend_from_slice(request_data),
        0x02 => body.extend_from_slice(&comm_performance),
        _ => {}
    }

    let mut out = Vec::with_capacity(1 + body.len());
    out.push((body.len() + 1) as u8);
    out.extend_from_slice(&body);
    out
}

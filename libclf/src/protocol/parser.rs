// libclf/src/protocol/parser.rs

//! Length and code checks for received payloads.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure the byte at `idx` equals `expected`. Returns UnexpectedResponse on
/// mismatch and InvalidLength if the slice is too short.
pub fn expect_byte_at(data: &[u8], idx: usize, expected: u8) -> Result<()> {
    let actual = byte_at(data, idx)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}

/// Ensure the first byte (response code) equals `expected`.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    expect_byte_at(data, 0, expected)
}

/// Ensure a length-prefixed NFC-F packet carries its own total length in
/// the first byte.
pub fn expect_length_byte(data: &[u8]) -> Result<()> {
    let len = byte_at(data, 0)? as usize;
    if len != data.len() {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

// libclf/src/protocol/checksum.rs

//! NFC-A check byte.

/// Block check character of an NFC-A UID fragment: XOR of its bytes.
pub fn bcc(fragment: &[u8]) -> u8 {
    fragment.iter().fold(0u8, |acc, &b| acc ^ b)
}

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockLink setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::Device;
use crate::transport::MockLink;
use crate::types::BitrateType;

/// Build a MockLink pre-seeded with `(brty, hex payload)` replies.
#[doc(hidden)]
pub fn mock_with_replies(brty: BitrateType, replies: &[&str]) -> MockLink {
    let mut mock = MockLink::new();
    seed_replies(&mut mock, brty, replies);
    mock
}

/// Push hex payloads as frames at `brty`. Invalid hex is a bug in the
/// calling test.
#[doc(hidden)]
pub fn seed_replies(mock: &mut MockLink, brty: BitrateType, replies: &[&str]) {
    for hex in replies {
        let payload = crate::utils::parse_hex(&hex.replace(' ', ""))
            .unwrap_or_else(|e| panic!("bad fixture '{}': {}", hex, e));
        mock.push_frame(brty, payload);
    }
}

/// Convenience: a Device backed by a MockLink pre-seeded with replies.
#[doc(hidden)]
pub fn mock_device(brty: BitrateType, replies: &[&str]) -> Device<MockLink> {
    Device::new(mock_with_replies(brty, replies))
}

/// Hex tokens of everything the device has sent, e.g. `"106A 26"`.
#[doc(hidden)]
pub fn sent(device: &Device<MockLink>) -> Vec<String> {
    device.link().sent_tokens()
}

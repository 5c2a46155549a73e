// libclf/src/target/activation.rs

//! First command received after activation.

use crate::constants::{ATR_REQ_CMD1, DEP_REQ_CMD0, DEP_SB, RATS_CMD, SENSF_REQ_CMD};
use crate::protocol::parser;

/// First command received by an emulated target after activation. It is
/// handed to the caller unanswered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationCommand {
    /// NFC-A command that is neither RATS nor ATR_REQ (Type 2 tag command).
    Tt2Command(Vec<u8>),
    /// NFC-F command, without its length byte.
    Tt3Command(Vec<u8>),
    /// RATS on NFC-A or any command on NFC-B.
    Tt4Command(Vec<u8>),
    /// DEP ATR_REQ starting at `D4 00`, transport envelope removed.
    AtrRequest(Vec<u8>),
}

impl ActivationCommand {
    /// Captured command bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Tt2Command(b)
            | Self::Tt3Command(b)
            | Self::Tt4Command(b)
            | Self::AtrRequest(b) => b.as_slice(),
        }
    }

    /// Attribute name of the command kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tt2Command(_) => "tt2_cmd",
            Self::Tt3Command(_) => "tt3_cmd",
            Self::Tt4Command(_) => "tt4_cmd",
            Self::AtrRequest(_) => "atr_req",
        }
    }

    /// Classify the frame received after the final SAK.
    pub fn from_nfca(cmd: &[u8]) -> Self {
        match cmd {
            [DEP_SB, _len, DEP_REQ_CMD0, ATR_REQ_CMD1, ..] => Self::AtrRequest(cmd[2..].to_vec()),
            [RATS_CMD, ..] => Self::Tt4Command(cmd.to_vec()),
            _ => Self::Tt2Command(cmd.to_vec()),
        }
    }

    /// Classify a frame received after the SENSF_RES. Returns `None` for
    /// frames with an inconsistent length byte and for anything carrying the
    /// SENSF_REQ command code.
    pub fn from_nfcf(cmd: &[u8]) -> Option<Self> {
        parser::ensure_len(cmd, 2).ok()?;
        parser::expect_length_byte(cmd).ok()?;
        match &cmd[1..] {
            [SENSF_REQ_CMD, ..] => None,
            [DEP_REQ_CMD0, ATR_REQ_CMD1, ..] => Some(Self::AtrRequest(cmd[1..].to_vec())),
            body => Some(Self::Tt3Command(body.to_vec())),
        }
    }
}

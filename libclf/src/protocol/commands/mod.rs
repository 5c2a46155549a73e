// libclf/src/protocol/commands/mod.rs

//! Activation commands sent by the initiator and recognised by the
//! listener.

pub mod tta;
pub mod ttb;
pub mod ttf;

pub use tta::{encode_rid_cmd, encode_sdd_req, encode_sel_req, encode_sens_req};
pub use ttb::{encode_sensb_req, is_sensb_req};
pub use ttf::{SensfReq, encode_sensf_req, parse_sensf_req};

use crate::protocol::cascade::CascadeLevel;

/// Initiator-side activation commands. Per-family encoders live in
/// `protocol::commands::<family>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// NFC-A SENS_REQ (REQA)
    SensReq,
    /// Type 1 tag RID
    RidCmd,
    /// Anticollision request for one cascade level
    SddReq {
        /// Addressed level.
        level: CascadeLevel,
    },
    /// Select with a complete UID CLn field (fragment, optionally with BCC)
    SelReq {
        /// Addressed level.
        level: CascadeLevel,
        /// UID CLn field sent with the select.
        uid_cln: Vec<u8>,
    },
    /// NFC-B SENSB_REQ (REQB)
    SensbReq,
    /// NFC-F SENSF_REQ with its body (without the length byte)
    SensfReq {
        /// Command code, system code, request code and TSN.
        body: Vec<u8>,
    },
}

impl Command {
    /// Encode the command into the raw frame payload.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SensReq => encode_sens_req(),
            Self::RidCmd => encode_rid_cmd(),
            Self::SddReq { level } => encode_sdd_req(*level),
            Self::SelReq { level, uid_cln } => encode_sel_req(*level, uid_cln),
            Self::SensbReq => encode_sensb_req(),
            Self::SensfReq { body } => encode_sensf_req(body),
        }
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SensReq => "SENS_REQ",
            Self::RidCmd => "RID_CMD",
            Self::SddReq { .. } => "SDD_REQ",
            Self::SelReq { .. } => "SEL_REQ",
            Self::SensbReq => "SENSB_REQ",
            Self::SensfReq { .. } => "SENSF_REQ",
        }
    }
}

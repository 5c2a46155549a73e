// libclf/src/target/local.rs

//! Emulated card identities.

use crate::constants::SENSF_RES_MIN_LEN;
use crate::protocol::responses::decode_sensb_res;
use crate::protocol::{parser, responses::ttf};
use crate::target::ActivationCommand;
use crate::types::{BitrateType, SystemCode, Uid};
use crate::Result;

/// Default communication performance field returned for request code 2.
pub const DEFAULT_COMMUNICATION_PERFORMANCE: [u8; 2] = [0x00, 0x01];

/// Identity presented by an emulated card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// NFC-A identity.
    TypeA {
        /// SENS_RES answered to REQA/WUPA.
        sens_res: [u8; 2],
        /// UID presented through the cascade.
        sdd_res: Uid,
        /// Final SAK.
        sel_res: u8,
    },
    /// NFC-B identity.
    TypeB {
        /// SENSB_RES answered to REQB.
        sensb_res: Vec<u8>,
    },
    /// `sensf_res` without length byte: response code, IDm, PMm and
    /// optionally 2 bytes of request data (system code).
    TypeF {
        /// Response code, IDm, PMm and optional request data.
        sensf_res: Vec<u8>,
        /// Field answered for request code 2.
        communication_performance: [u8; 2],
    },
}

/// Card emulated by a listen procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTarget {
    brty: BitrateType,
    identity: Identity,
    captured: Option<ActivationCommand>,
}

impl LocalTarget {
    /// NFC-A identity at 106 kbps.
    pub fn type_a(sens_res: [u8; 2], sdd_res: Uid, sel_res: u8) -> Self {
        Self {
            brty: BitrateType::A106,
            identity: Identity::TypeA {
                sens_res,
                sdd_res,
                sel_res,
            },
            captured: None,
        }
    }

    /// NFC-B identity; `sensb_res` must be a valid 12-byte ATQB.
    pub fn type_b(sensb_res: impl Into<Vec<u8>>) -> Result<Self> {
        let sensb_res = decode_sensb_res(&sensb_res.into())?;
        Ok(Self {
            brty: BitrateType::B106,
            identity: Identity::TypeB { sensb_res },
            captured: None,
        })
    }

    /// NFC-F identity at `brty`. `sensf_res` excludes the length byte and
    /// holds response code, IDm and PMm, optionally followed by 2 bytes of
    /// request data.
    pub fn type_f(brty: BitrateType, sensf_res: impl Into<Vec<u8>>) -> Result<Self> {
        let sensf_res = sensf_res.into();
        parser::ensure_len(&sensf_res, SENSF_RES_MIN_LEN - 1)?;
        if sensf_res.len() != SENSF_RES_MIN_LEN - 1 {
            parser::ensure_exact_len(&sensf_res, SENSF_RES_MIN_LEN + 1)?;
        }
        Ok(Self {
            brty,
            identity: Identity::TypeF {
                sensf_res,
                communication_performance: DEFAULT_COMMUNICATION_PERFORMANCE,
            },
            captured: None,
        })
    }

    /// Set the field answered to a SENSF_REQ with request code 2. No effect
    /// on other identities.
    pub fn with_communication_performance(mut self, value: [u8; 2]) -> Self {
        if let Identity::TypeF {
            communication_performance,
            ..
        } = &mut self.identity
        {
            *communication_performance = value;
        }
        self
    }

    pub(crate) fn with_captured(mut self, cmd: ActivationCommand) -> Self {
        self.captured = Some(cmd);
        self
    }

    /// Bitrate the identity is emulated at.
    pub fn brty(&self) -> BitrateType {
        self.brty
    }

    /// Emulated identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The command captured after activation, if this target was returned
    /// by a listen procedure.
    pub fn captured(&self) -> Option<&ActivationCommand> {
        self.captured.as_ref()
    }

    /// Captured Type 2 tag command.
    pub fn tt2_cmd(&self) -> Option<&[u8]> {
        match &self.captured {
            Some(ActivationCommand::Tt2Command(b)) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Captured Type 3 tag command, without length byte.
    pub fn tt3_cmd(&self) -> Option<&[u8]> {
        match &self.captured {
            Some(ActivationCommand::Tt3Command(b)) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Captured Type 4 tag command.
    pub fn tt4_cmd(&self) -> Option<&[u8]> {
        match &self.captured {
            Some(ActivationCommand::Tt4Command(b)) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Captured ATR_REQ, starting at `D4 00`.
    pub fn atr_req(&self) -> Option<&[u8]> {
        match &self.captured {
            Some(ActivationCommand::AtrRequest(b)) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// System code of a Type F identity, taken from its request data.
    pub fn system_code(&self) -> Option<SystemCode> {
        match &self.identity {
            Identity::TypeF { sensf_res, .. } => {
                let rd = sensf_res.get(SENSF_RES_MIN_LEN - 1..SENSF_RES_MIN_LEN + 1)?;
                Some(SystemCode::from_be_bytes([rd[0], rd[1]]))
            }
            _ => None,
        }
    }

    /// Whether a SENSF_REQ for `requested` addresses this identity. Without
    /// configured request data only the full wildcard matches.
    pub fn answers_system_code(&self, requested: SystemCode) -> bool {
        match self.system_code() {
            Some(own) => own.matches(requested),
            None => requested == SystemCode::ANY,
        }
    }

    /// SENSF_RES (with length byte) for the given request code.
    pub(crate) fn sensf_res_for(&self, request_code: u8) -> Option<Vec<u8>> {
        match &self.identity {
            Identity::TypeF {
                sensf_res,
                communication_performance,
            } => Some(ttf::encode_sensf_res(
                sensf_res,
                request_code,
                *communication_performance,
            )),
            _ => None,
        }
    }
}

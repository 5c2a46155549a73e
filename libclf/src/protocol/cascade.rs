// libclf/src/protocol/cascade.rs

//! NFC-A anticollision cascade, shared by the sense and listen procedures.
//!
//! A UID of 4, 7 or 10 bytes is transferred in one, two or three cascade
//! levels. Every level carries a 4-byte fragment; non-final fragments start
//! with the cascade tag `0x88` followed by three UID bytes.

use crate::constants::{
    ALL_REQ, CASCADE_TAG, NVB_SDD, NVB_SEL, SAK_CASCADE_BIT, SEL_CL1, SEL_CL2, SEL_CL3, SENS_REQ,
};
use crate::protocol::checksum::bcc;
use crate::types::Uid;
use crate::{Error, Result};

/// Cascade level CL1..CL3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeLevel {
    /// CL1
    One,
    /// CL2
    Two,
    /// CL3
    Three,
}

impl CascadeLevel {
    /// All levels in cascade order.
    pub const ALL: [CascadeLevel; 3] = [Self::One, Self::Two, Self::Three];

    /// SEL_CMD byte of this level.
    pub fn sel_cmd(self) -> u8 {
        match self {
            Self::One => SEL_CL1,
            Self::Two => SEL_CL2,
            Self::Three => SEL_CL3,
        }
    }

    /// Level addressed by a SEL_CMD byte.
    pub fn from_sel_cmd(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.sel_cmd() == code)
    }

    /// Following level, `None` after CL3.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => None,
        }
    }

    /// Zero-based position of the level.
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }
}

/// Split a UID into its per-level 4-byte fragments, inserting cascade tags.
pub fn uid_fragments(uid: &Uid) -> Vec<[u8; 4]> {
    let bytes = uid.as_bytes();
    let mut tagged = Vec::with_capacity(12);
    // Three UID bytes fit behind the tag of each non-final level.
    let mut rest = bytes;
    while rest.len() > 4 {
        tagged.push(CASCADE_TAG);
        tagged.extend_from_slice(&rest[..3]);
        rest = &rest[3..];
    }
    tagged.extend_from_slice(rest);

    tagged
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect()
}

/// Append the BCC to a UID fragment (the UID CLn field of a SEL_REQ).
pub fn with_bcc(fragment: &[u8; 4]) -> [u8; 5] {
    [
        fragment[0],
        fragment[1],
        fragment[2],
        fragment[3],
        bcc(fragment),
    ]
}

/// True when the SAK signals an incomplete UID.
pub fn sak_has_cascade_bit(sak: u8) -> bool {
    sak & SAK_CASCADE_BIT != 0
}

/// Outcome of recording one level on the initiator side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStep {
    /// The SAK asked for the given next level.
    Continue(CascadeLevel),
    /// The UID is complete.
    Complete {
        /// Complete UID, cascade tags removed.
        uid: Uid,
        /// Final SAK.
        sak: u8,
    },
}

/// Initiator-side cascade accumulator.
#[derive(Debug, Clone)]
pub struct SenseCascade {
    level: CascadeLevel,
    uid: Vec<u8>,
}

impl SenseCascade {
    /// Start at cascade level 1 with an empty UID.
    pub fn new() -> Self {
        Self {
            level: CascadeLevel::One,
            uid: Vec::with_capacity(10),
        }
    }

    /// Level the next SDD/SEL exchange addresses.
    pub fn level(&self) -> CascadeLevel {
        self.level
    }

    /// Record the SDD_RES and SAK received at the current level.
    pub fn advance(&mut self, sdd_res: &[u8], sak: u8) -> Result<CascadeStep> {
        crate::protocol::parser::ensure_len(sdd_res, 4)?;

        if !sak_has_cascade_bit(sak) {
            self.uid.extend_from_slice(&sdd_res[..4]);
            let uid = Uid::try_from(&self.uid[..])?;
            return Ok(CascadeStep::Complete { uid, sak });
        }

        let next = self.level.next().ok_or(Error::ExcessiveUid)?;
        crate::protocol::parser::expect_byte_at(sdd_res, 0, CASCADE_TAG)?;
        self.uid.extend_from_slice(&sdd_res[1..4]);
        self.level = next;
        Ok(CascadeStep::Continue(next))
    }
}

impl Default for SenseCascade {
    fn default() -> Self {
        Self::new()
    }
}

/// What the listening side does with a received command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenAction {
    /// Send this payload back.
    Reply(Vec<u8>),
    /// Not a command for the current state; stay silent.
    Ignore,
    /// First command after activation; returned unanswered.
    Capture(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenState {
    Idle,
    Ready(CascadeLevel),
    Active,
}

/// Shape of an NFC-A command as seen by the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandShape<'a> {
    Poll,
    SddReq(CascadeLevel),
    SelReq(&'a [u8]),
    Other,
}

impl<'a> CommandShape<'a> {
    fn of(cmd: &'a [u8]) -> Self {
        match cmd {
            [SENS_REQ] | [ALL_REQ] => Self::Poll,
            [code, NVB_SDD] => CascadeLevel::from_sel_cmd(*code)
                .map(Self::SddReq)
                .unwrap_or(Self::Other),
            // The SEL_CMD byte is not checked against the level here: the
            // UID CLn content already identifies the level.
            [code, NVB_SEL, uid_cln @ ..]
                if uid_cln.len() == 5 && CascadeLevel::from_sel_cmd(*code).is_some() =>
            {
                Self::SelReq(uid_cln)
            }
            _ => Self::Other,
        }
    }
}

/// Target-side cascade state machine for an emulated NFC-A identity.
#[derive(Debug, Clone)]
pub struct ListenCascade {
    sens_res: [u8; 2],
    sel_res: u8,
    uid_cln: Vec<[u8; 5]>,
    state: ListenState,
}

impl ListenCascade {
    /// Responder presenting `uid` with the given SENS_RES and final SAK.
    pub fn new(sens_res: [u8; 2], uid: &Uid, sel_res: u8) -> Self {
        Self {
            sens_res,
            sel_res,
            uid_cln: uid_fragments(uid).iter().map(with_bcc).collect(),
            state: ListenState::Idle,
        }
    }

    /// True once the final SAK has been sent.
    pub fn is_active(&self) -> bool {
        self.state == ListenState::Active
    }

    /// Feed one received command through the transition table.
    pub fn on_command(&mut self, cmd: &[u8]) -> ListenAction {
        match (self.state, CommandShape::of(cmd)) {
            (ListenState::Active, CommandShape::Poll) => ListenAction::Ignore,
            (ListenState::Active, _) if cmd.is_empty() => ListenAction::Ignore,
            (ListenState::Active, _) => ListenAction::Capture(cmd.to_vec()),

            (_, CommandShape::Poll) => {
                self.state = ListenState::Ready(CascadeLevel::One);
                ListenAction::Reply(self.sens_res.to_vec())
            }

            (ListenState::Ready(level), CommandShape::SddReq(requested)) if requested == level => {
                ListenAction::Reply(self.uid_cln[level.index()].to_vec())
            }

            (ListenState::Ready(level), CommandShape::SelReq(uid_cln))
                if uid_cln == &self.uid_cln[level.index()][..] =>
            {
                let last = level.index() + 1 == self.uid_cln.len();
                match (last, level.next()) {
                    (false, Some(next)) => {
                        self.state = ListenState::Ready(next);
                        ListenAction::Reply(vec![SAK_CASCADE_BIT])
                    }
                    _ => {
                        self.state = ListenState::Active;
                        ListenAction::Reply(vec![self.sel_res & !SAK_CASCADE_BIT])
                    }
                }
            }

            _ => ListenAction::Ignore,
        }
    }
}

// libclf/src/target/remote.rs

//! Descriptors of sensed peers.

use crate::types::{BitrateType, Idm, Pmm, SystemCode, Uid};

/// A peer found by a sense procedure.
///
/// The caller creates one with [`RemoteTarget::new`] (optionally adding a
/// known UID or a custom SENSF_REQ body) and passes it to a sense procedure,
/// which returns a new descriptor carrying the activation responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    brty: BitrateType,
    sel_req: Option<Uid>,
    sensf_req: Option<Vec<u8>>,
    sens_res: Option<[u8; 2]>,
    sdd_res: Option<Uid>,
    sel_res: Option<u8>,
    rid_res: Option<Vec<u8>>,
    sensb_res: Option<Vec<u8>>,
    sensf_res: Option<Vec<u8>>,
}

impl RemoteTarget {
    /// Empty descriptor for a sense procedure at `brty`.
    pub fn new(brty: BitrateType) -> Self {
        Self {
            brty,
            sel_req: None,
            sensf_req: None,
            sens_res: None,
            sdd_res: None,
            sel_res: None,
            rid_res: None,
            sensb_res: None,
            sensf_res: None,
        }
    }

    /// Select this UID directly instead of running anticollision.
    pub fn with_sel_req(mut self, uid: Uid) -> Self {
        self.sel_req = Some(uid);
        self
    }

    /// SENSF_REQ body (without length byte) to send instead of the default
    /// `00 ffff 01 00`.
    pub fn with_sensf_req(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.sensf_req = Some(body.into());
        self
    }

    pub(crate) fn with_sens_res(mut self, sens_res: [u8; 2]) -> Self {
        self.sens_res = Some(sens_res);
        self
    }

    pub(crate) fn with_sdd_res(mut self, uid: Uid) -> Self {
        self.sdd_res = Some(uid);
        self
    }

    pub(crate) fn with_sel_res(mut self, sak: u8) -> Self {
        self.sel_res = Some(sak);
        self
    }

    pub(crate) fn with_rid_res(mut self, rid_res: Vec<u8>) -> Self {
        self.rid_res = Some(rid_res);
        self
    }

    pub(crate) fn with_sensb_res(mut self, sensb_res: Vec<u8>) -> Self {
        self.sensb_res = Some(sensb_res);
        self
    }

    pub(crate) fn with_sensf_res(mut self, sensf_res: Vec<u8>) -> Self {
        self.sensf_res = Some(sensf_res);
        self
    }

    /// Bitrate of the peer.
    pub fn brty(&self) -> BitrateType {
        self.brty
    }

    /// Known UID selected directly, skipping SDD.
    pub fn sel_req(&self) -> Option<&Uid> {
        self.sel_req.as_ref()
    }

    /// Custom SENSF_REQ body.
    pub fn sensf_req(&self) -> Option<&[u8]> {
        self.sensf_req.as_deref()
    }

    /// SENS_RES (ATQA).
    pub fn sens_res(&self) -> Option<[u8; 2]> {
        self.sens_res
    }

    /// Complete UID, cascade tags removed.
    pub fn sdd_res(&self) -> Option<&Uid> {
        self.sdd_res.as_ref()
    }

    /// Final SAK.
    pub fn sel_res(&self) -> Option<u8> {
        self.sel_res
    }

    /// RID_RES of a Type 1 tag.
    pub fn rid_res(&self) -> Option<&[u8]> {
        self.rid_res.as_deref()
    }

    /// SENSB_RES (ATQB).
    pub fn sensb_res(&self) -> Option<&[u8]> {
        self.sensb_res.as_deref()
    }

    /// SENSF_RES without its length byte.
    pub fn sensf_res(&self) -> Option<&[u8]> {
        self.sensf_res.as_deref()
    }

    /// IDm from the SENSF_RES.
    pub fn idm(&self) -> Option<Idm> {
        let res = self.sensf_res.as_deref()?;
        Idm::try_from(res.get(1..9)?).ok()
    }

    /// PMm from the SENSF_RES.
    pub fn pmm(&self) -> Option<Pmm> {
        let res = self.sensf_res.as_deref()?;
        Pmm::try_from(res.get(9..17)?).ok()
    }

    /// System code, present when the SENSF_REQ used request code 1.
    pub fn system_code(&self) -> Option<SystemCode> {
        let rd = self.sensf_res.as_deref()?.get(17..19)?;
        Some(SystemCode::from_be_bytes([rd[0], rd[1]]))
    }
}

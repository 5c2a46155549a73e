// libclf/src/device/sense.rs

//! Initiator-side activation sequences.
//!
//! Every procedure validates the requested bitrate first, then runs a short
//! series of request/response exchanges. Any failure after the bitrate
//! check means "no activated peer" and is absorbed into `Ok(None)`.

use std::time::Duration;

use log::{debug, warn};

use crate::constants::{SENSF_REQ_DEFAULT_BODY, SENSF_REQ_MAX_BODY};
use crate::device::config::DeviceConfig;
use crate::protocol::cascade::{CascadeStep, SenseCascade, uid_fragments, with_bcc};
use crate::protocol::codec::command_frame;
use crate::protocol::commands::Command;
use crate::protocol::responses::{
    decode_rid_res, decode_sdd_res, decode_sel_res, decode_sens_res, decode_sensb_res,
    decode_sensf_res,
};
use crate::target::RemoteTarget;
use crate::transport::Link;
use crate::types::BitrateType;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Runs request/response exchanges at one bitrate and counts the answered
/// ones, so failures can be told apart as "nothing there" or "peer lost".
struct Initiator<'a, L: Link + ?Sized> {
    link: &'a mut L,
    brty: BitrateType,
    first_timeout: Duration,
    timeout: Duration,
    answered: usize,
}

impl<'a, L: Link + ?Sized> Initiator<'a, L> {
    fn new(link: &'a mut L, config: &DeviceConfig, brty: BitrateType) -> Self {
        Self {
            link,
            brty,
            first_timeout: config.sense_timeout,
            timeout: config.exchange_timeout,
            answered: 0,
        }
    }

    fn exchange(&mut self, cmd: Command) -> Result<Vec<u8>> {
        let frame = command_frame(self.brty, &cmd);
        debug!("send {} {}", cmd.name(), bytes_to_hex(&frame.payload));
        self.link.send(&frame)?;

        let timeout = if self.answered == 0 {
            self.first_timeout
        } else {
            self.timeout
        };
        let rsp = self.link.receive(timeout)?;
        if rsp.brty != self.brty {
            return Err(Error::MalformedFrame(format!(
                "response at {} to a {} request",
                rsp.brty, self.brty
            )));
        }
        self.answered += 1;
        debug!("rcvd {}", bytes_to_hex(&rsp.payload));
        Ok(rsp.payload)
    }

    /// Turn the outcome of a procedure into the public contract.
    fn finish(self, result: Result<RemoteTarget>) -> Result<Option<RemoteTarget>> {
        match result {
            Ok(target) => Ok(Some(target)),
            Err(e) if e.is_fatal() => Err(e),
            Err(Error::ExcessiveUid) => {
                warn!("{} target with excessive uid", self.brty);
                Ok(None)
            }
            Err(e) if self.answered == 0 => {
                debug!("no target found at {}: {}", self.brty, e);
                Ok(None)
            }
            Err(e) => {
                debug!("{} target lost: {}", self.brty, e);
                Ok(None)
            }
        }
    }
}

fn require(target: &RemoteTarget, accepted: &[BitrateType]) -> Result<()> {
    if accepted.contains(&target.brty()) {
        Ok(())
    } else {
        Err(Error::unsupported_bitrate(target.brty()))
    }
}

/// Activate an NFC-A target: SENS_REQ, then either RID (Type 1) or the
/// anticollision cascade.
pub fn sense_tta<L: Link + ?Sized>(
    link: &mut L,
    config: &DeviceConfig,
    target: &RemoteTarget,
) -> Result<Option<RemoteTarget>> {
    require(target, &[BitrateType::A106])?;
    let mut ini = Initiator::new(link, config, BitrateType::A106);
    let result = run_tta(&mut ini, target);
    ini.finish(result)
}

fn run_tta<L: Link + ?Sized>(
    ini: &mut Initiator<'_, L>,
    target: &RemoteTarget,
) -> Result<RemoteTarget> {
    let sens_res = decode_sens_res(&ini.exchange(Command::SensReq)?)?;
    let found = RemoteTarget::new(BitrateType::A106).with_sens_res(*sens_res.as_bytes());

    if sens_res.is_type1() {
        if !sens_res.supports_rid() {
            debug!("proprietary type 1 target");
            return Ok(found);
        }
        let rid_res = decode_rid_res(&ini.exchange(Command::RidCmd)?)?;
        return Ok(found.with_rid_res(rid_res));
    }

    let known: Option<Vec<[u8; 5]>> = target
        .sel_req()
        .map(|uid| uid_fragments(uid).iter().map(with_bcc).collect());

    let mut cascade = SenseCascade::new();
    loop {
        let level = cascade.level();
        let uid_cln = match &known {
            Some(fragments) => fragments
                .get(level.index())
                .map(|f| f.to_vec())
                .ok_or_else(|| {
                    Error::MalformedFrame(format!(
                        "cascade level {} beyond selected uid",
                        level.index() + 1
                    ))
                })?,
            None => decode_sdd_res(&ini.exchange(Command::SddReq { level })?)?.to_vec(),
        };

        let sak = decode_sel_res(&ini.exchange(Command::SelReq {
            level,
            uid_cln: uid_cln.clone(),
        })?)?;

        match cascade.advance(&uid_cln, sak)? {
            CascadeStep::Continue(next) => {
                debug!("uid incomplete, continue at cascade level {}", next.index() + 1);
            }
            CascadeStep::Complete { uid, sak } => {
                return Ok(found.with_sdd_res(uid).with_sel_res(sak));
            }
        }
    }
}

/// Activate an NFC-B target with a single SENSB_REQ.
pub fn sense_ttb<L: Link + ?Sized>(
    link: &mut L,
    config: &DeviceConfig,
    target: &RemoteTarget,
) -> Result<Option<RemoteTarget>> {
    require(target, &[BitrateType::B106])?;
    let mut ini = Initiator::new(link, config, BitrateType::B106);
    let result = ini
        .exchange(Command::SensbReq)
        .and_then(|rsp| decode_sensb_res(&rsp))
        .map(|sensb_res| RemoteTarget::new(BitrateType::B106).with_sensb_res(sensb_res));
    ini.finish(result)
}

/// Activate an NFC-F target at 212 or 424 kbps with a single SENSF_REQ.
pub fn sense_ttf<L: Link + ?Sized>(
    link: &mut L,
    config: &DeviceConfig,
    target: &RemoteTarget,
) -> Result<Option<RemoteTarget>> {
    require(target, &[BitrateType::F212, BitrateType::F424])?;
    let brty = target.brty();
    let body = target
        .sensf_req()
        .map(|b| b.to_vec())
        .unwrap_or_else(|| SENSF_REQ_DEFAULT_BODY.to_vec());
    if body.len() > SENSF_REQ_MAX_BODY {
        debug!(
            "sensf_req body of {} bytes exceeds {} bytes, not sent",
            body.len(),
            SENSF_REQ_MAX_BODY
        );
        return Ok(None);
    }

    let mut ini = Initiator::new(link, config, brty);
    let result = ini
        .exchange(Command::SensfReq { body })
        .and_then(|rsp| decode_sensf_res(&rsp))
        .map(|sensf_res| RemoteTarget::new(brty).with_sensf_res(sensf_res));
    ini.finish(result)
}

/// Active-mode DEP targets cannot be sensed by this frontend.
pub fn sense_dep<L: Link + ?Sized>(
    link: &L,
    config: &DeviceConfig,
    _target: &RemoteTarget,
) -> Result<Option<RemoteTarget>> {
    Err(Error::UnsupportedTarget(format!(
        "{} {} at {} does not support sense for active DEP Target",
        config.device_name,
        config.chipset_name,
        link.peer()
    )))
}

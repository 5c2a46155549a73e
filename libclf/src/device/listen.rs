// libclf/src/device/listen.rs

//! Target-side activation sequences.
//!
//! A listen procedure binds the link, then receives frames until its
//! deadline passes. Each frame is fed to a per-family responder which
//! either answers it, ignores it, or recognises the first command after
//! activation. That command is returned unanswered.

use std::time::Duration;

use log::{debug, warn};

use crate::device::config::DeviceConfig;
use crate::protocol::cascade::{ListenAction, ListenCascade};
use crate::protocol::commands::{is_sensb_req, parse_sensf_req};
use crate::protocol::Frame;
use crate::target::{ActivationCommand, Identity, LocalTarget};
use crate::transport::Link;
use crate::types::BitrateType;
use crate::utils::{bytes_to_hex, Deadline};
use crate::{Error, Result};

/// What a responder does with one received payload.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Reply(Vec<u8>),
    Ignore,
    Done(ActivationCommand),
}

/// Emulate an NFC-A card through the anticollision cascade.
pub fn listen_tta<L: Link + ?Sized>(
    link: &mut L,
    _config: &DeviceConfig,
    target: &LocalTarget,
    timeout: Duration,
) -> Result<Option<LocalTarget>> {
    let Identity::TypeA {
        sens_res,
        sdd_res,
        sel_res,
    } = target.identity()
    else {
        return Err(Error::unsupported_bitrate(target.brty()));
    };

    let mut cascade = ListenCascade::new(*sens_res, sdd_res, *sel_res);
    let responder = move |cmd: &[u8]| match cascade.on_command(cmd) {
        ListenAction::Reply(rsp) => Step::Reply(rsp),
        ListenAction::Ignore => Step::Ignore,
        ListenAction::Capture(cmd) => Step::Done(ActivationCommand::from_nfca(&cmd)),
    };
    listen(link, target, timeout, responder)
}

/// Emulate an NFC-B card: one SENSB_RES, then capture the next command.
pub fn listen_ttb<L: Link + ?Sized>(
    link: &mut L,
    _config: &DeviceConfig,
    target: &LocalTarget,
    timeout: Duration,
) -> Result<Option<LocalTarget>> {
    let Identity::TypeB { sensb_res } = target.identity() else {
        return Err(Error::unsupported_bitrate(target.brty()));
    };

    let mut replied = false;
    let responder = move |cmd: &[u8]| match (replied, is_sensb_req(cmd)) {
        (false, true) => {
            replied = true;
            Step::Reply(sensb_res.clone())
        }
        (true, false) if !cmd.is_empty() => Step::Done(ActivationCommand::Tt4Command(cmd.to_vec())),
        _ => Step::Ignore,
    };
    listen(link, target, timeout, responder)
}

/// Emulate an NFC-F card at 212 or 424 kbps: answer one matching SENSF_REQ,
/// then capture the next command.
pub fn listen_ttf<L: Link + ?Sized>(
    link: &mut L,
    _config: &DeviceConfig,
    target: &LocalTarget,
    timeout: Duration,
) -> Result<Option<LocalTarget>> {
    if !target.brty().is_type_f() || !matches!(target.identity(), Identity::TypeF { .. }) {
        return Err(Error::unsupported_bitrate(target.brty()));
    }

    let mut replied = false;
    let responder = move |cmd: &[u8]| {
        if replied {
            return ActivationCommand::from_nfcf(cmd)
                .map(Step::Done)
                .unwrap_or(Step::Ignore);
        }
        let reply = parse_sensf_req(cmd)
            .filter(|req| target.answers_system_code(req.system_code))
            .and_then(|req| target.sensf_res_for(req.request_code));
        match reply {
            Some(rsp) => {
                replied = true;
                Step::Reply(rsp)
            }
            None => Step::Ignore,
        }
    };
    listen(link, target, timeout, responder)
}

fn listen<L, F>(
    link: &mut L,
    target: &LocalTarget,
    timeout: Duration,
    responder: F,
) -> Result<Option<LocalTarget>>
where
    L: Link + ?Sized,
    F: FnMut(&[u8]) -> Step,
{
    let brty = target.brty();
    if let Err(e) = link.bind() {
        warn!("cannot listen at {} on {}: {}", brty, link.peer(), e);
        return Ok(None);
    }

    match serve(link, brty, Deadline::after(timeout), responder) {
        Ok(Some(cmd)) => {
            debug!("{} activated, captured {} {}", brty, cmd.name(), bytes_to_hex(cmd.as_bytes()));
            Ok(Some(target.clone().with_captured(cmd)))
        }
        Ok(None) => {
            debug!("listen {} timed out", brty);
            Ok(None)
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            debug!("listen {} aborted: {}", brty, e);
            Ok(None)
        }
    }
}

fn serve<L, F>(
    link: &mut L,
    brty: BitrateType,
    deadline: Deadline,
    mut responder: F,
) -> Result<Option<ActivationCommand>>
where
    L: Link + ?Sized,
    F: FnMut(&[u8]) -> Step,
{
    while let Some(remaining) = deadline.remaining() {
        let frame = match link.receive(remaining) {
            Ok(frame) => frame,
            Err(Error::Timeout) => return Ok(None),
            Err(e) => return Err(e),
        };
        if frame.brty != brty {
            debug!("ignore frame at {} while listening at {}", frame.brty, brty);
            continue;
        }

        match responder(&frame.payload) {
            Step::Reply(rsp) => {
                debug!("rcvd {} send {}", bytes_to_hex(&frame.payload), bytes_to_hex(&rsp));
                link.send(&Frame::new(brty, rsp))?;
            }
            Step::Ignore => debug!("ignore {}", bytes_to_hex(&frame.payload)),
            Step::Done(cmd) => return Ok(Some(cmd)),
        }
    }
    Ok(None)
}

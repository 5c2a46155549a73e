// libclf/src/device/handle.rs

//! The [`Device`] handle.

use std::time::Duration;

use log::debug;

use crate::device::config::DeviceConfig;
use crate::device::{listen, sense};
use crate::target::{LocalTarget, RemoteTarget};
use crate::transport::Link;
use crate::Result;

/// Contactless frontend driving one link.
///
/// Each sense or listen call runs a complete activation sequence and
/// returns `Ok(None)` when no peer was activated. Only a request the
/// frontend can never serve is an error.
pub struct Device<L: Link> {
    link: L,
    config: DeviceConfig,
}

impl<L: Link> Device<L> {
    /// Create a Device from an existing Link instance with the default
    /// configuration.
    pub fn new(link: L) -> Self {
        Self::with_config(link, DeviceConfig::default())
    }

    /// Create a Device with an explicit configuration.
    pub fn with_config(link: L, config: DeviceConfig) -> Self {
        Self { link, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Borrow the underlying link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Mutably borrow the underlying link.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Device and chipset name, e.g. `"IP-Stack UDP"`.
    pub fn name(&self) -> String {
        format!("{} {}", self.config.device_name, self.config.chipset_name)
    }

    /// Activate an NFC-A target at 106 kbps.
    pub fn sense_tta(&mut self, target: &RemoteTarget) -> Result<Option<RemoteTarget>> {
        sense::sense_tta(&mut self.link, &self.config, target)
    }

    /// Activate an NFC-B target at 106 kbps.
    pub fn sense_ttb(&mut self, target: &RemoteTarget) -> Result<Option<RemoteTarget>> {
        sense::sense_ttb(&mut self.link, &self.config, target)
    }

    /// Activate an NFC-F target at 212 or 424 kbps.
    pub fn sense_ttf(&mut self, target: &RemoteTarget) -> Result<Option<RemoteTarget>> {
        sense::sense_ttf(&mut self.link, &self.config, target)
    }

    /// Always fails: active DEP targets are not sensed by this frontend.
    pub fn sense_dep(&mut self, target: &RemoteTarget) -> Result<Option<RemoteTarget>> {
        sense::sense_dep(&self.link, &self.config, target)
    }

    /// Emulate the NFC-A identity of `target` for at most `timeout`.
    pub fn listen_tta(
        &mut self,
        target: &LocalTarget,
        timeout: Duration,
    ) -> Result<Option<LocalTarget>> {
        listen::listen_tta(&mut self.link, &self.config, target, timeout)
    }

    /// Emulate the NFC-B identity of `target` for at most `timeout`.
    pub fn listen_ttb(
        &mut self,
        target: &LocalTarget,
        timeout: Duration,
    ) -> Result<Option<LocalTarget>> {
        listen::listen_ttb(&mut self.link, &self.config, target, timeout)
    }

    /// Emulate the NFC-F identity of `target` for at most `timeout`.
    pub fn listen_ttf(
        &mut self,
        target: &LocalTarget,
        timeout: Duration,
    ) -> Result<Option<LocalTarget>> {
        listen::listen_ttf(&mut self.link, &self.config, target, timeout)
    }

    /// Release the link and hand it back.
    pub fn close(mut self) -> Result<L> {
        debug!("closing {} at {}", self.name(), self.link.peer());
        self.link.close()?;
        Ok(self.link)
    }
}

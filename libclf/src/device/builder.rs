// libclf/src/device/builder.rs

//! Builder for [`Device`].

use std::time::Duration;

use crate::device::config::DeviceConfig;
use crate::device::handle::Device;
use crate::transport::Link;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<L: Link> {
    link: Option<L>,
    config: DeviceConfig,
}

impl<L: Link> Default for DeviceBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Link> DeviceBuilder<L> {
    /// Builder without a link and with the default configuration.
    pub fn new() -> Self {
        Self {
            link: None,
            config: DeviceConfig::default(),
        }
    }

    /// Provide an already-created link instance (e.g. MockLink)
    pub fn with_link(mut self, link: L) -> Self {
        self.link = Some(link);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set device and chipset name.
    pub fn names(mut self, device_name: &str, chipset_name: &str) -> Self {
        self.config = self.config.with_names(device_name, chipset_name);
        self
    }

    /// Set first-exchange and later-exchange timeouts.
    pub fn timeouts(mut self, sense: Duration, exchange: Duration) -> Self {
        self.config = self.config.with_timeouts(sense, exchange);
        self
    }

    /// Consume the builder and return a Device. Requires a link to be
    /// provided.
    pub fn build(self) -> Result<Device<L>> {
        match self.link {
            Some(link) => Ok(Device::with_config(link, self.config)),
            None => Err(Error::Communication("no link configured".into())),
        }
    }
}

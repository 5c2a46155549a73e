// libclf/src/device/config.rs

//! Device identity and exchange timeouts.

use std::time::Duration;

use crate::utils::{ms, DEFAULT_EXCHANGE_TIMEOUT_MS, DEFAULT_SENSE_TIMEOUT_MS};

/// Name reported for the datagram frontend.
pub const DEFAULT_DEVICE_NAME: &str = "IP-Stack";
/// Chipset reported for the datagram frontend.
pub const DEFAULT_CHIPSET_NAME: &str = "UDP";

/// Per-device settings used by the sense and listen procedures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// Device name used in messages.
    pub device_name: String,
    /// Chipset name used in messages.
    pub chipset_name: String,
    /// Receive timeout for the first exchange of a sense procedure.
    pub sense_timeout: Duration,
    /// Receive timeout for every later exchange.
    pub exchange_timeout: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            chipset_name: DEFAULT_CHIPSET_NAME.to_string(),
            sense_timeout: ms(DEFAULT_SENSE_TIMEOUT_MS),
            exchange_timeout: ms(DEFAULT_EXCHANGE_TIMEOUT_MS),
        }
    }
}

impl DeviceConfig {
    /// Replace device and chipset name.
    pub fn with_names(mut self, device_name: &str, chipset_name: &str) -> Self {
        self.device_name = device_name.to_string();
        self.chipset_name = chipset_name.to_string();
        self
    }

    /// Replace both sense timeouts.
    pub fn with_timeouts(mut self, sense: Duration, exchange: Duration) -> Self {
        self.sense_timeout = sense;
        self.exchange_timeout = exchange;
        self
    }
}

// libclf/src/prelude.rs

//! Commonly used types, re-exported for `use libclf::prelude::*`.

pub use crate::device::{Device, DeviceBuilder, DeviceConfig};
pub use crate::protocol::{Command, Frame};
pub use crate::target::{ActivationCommand, Identity, LocalTarget, RemoteTarget};
pub use crate::transport::{Link, MockLink};
#[cfg(feature = "udp")]
pub use crate::transport::UdpLink;
pub use crate::{BitrateType, Error, Idm, Pmm, Result, SystemCode, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};

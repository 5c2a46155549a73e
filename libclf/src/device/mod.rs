// libclf/src/device/mod.rs

//! Contactless frontend device: configuration, construction, and the
//! sense and listen procedures.

pub mod builder;
pub mod config;
pub mod handle;
pub mod listen;
pub mod sense;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use handle::Device;

// libclf/src/protocol/mod.rs

//! Frame codec, activation commands and responses, and the NFC-A
//! anticollision cascade.

pub mod cascade;
pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use cascade::{CascadeLevel, ListenCascade, SenseCascade};
pub use checksum::bcc;
pub use commands::*;
pub use frame::Frame;
pub use responses::*;

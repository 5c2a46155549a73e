// libclf/src/target/mod.rs

//! Descriptors exchanged with the sense and listen procedures.

pub mod activation;
pub mod local;
pub mod remote;

pub use activation::ActivationCommand;
pub use local::{Identity, LocalTarget};
pub use remote::RemoteTarget;

// libclf/src/lib.rs

//! libclf
//!
//! Contactless frontend protocol engine: NFC-A/B/F activation on the
//! initiator ("sense") and target ("listen") side over a framed datagram
//! link.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod target;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

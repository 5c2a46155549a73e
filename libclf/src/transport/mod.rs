// libclf/src/transport/mod.rs

//! Links carrying frames to and from a peer.

pub mod mock;
pub mod traits;
#[cfg(feature = "udp")]
pub mod udp;

pub use mock::MockLink;
pub use traits::Link;
#[cfg(feature = "udp")]
pub use udp::UdpLink;

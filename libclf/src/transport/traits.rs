// libclf/src/transport/traits.rs

//! The [`Link`] trait.

use std::time::Duration;

use crate::protocol::Frame;
use crate::Result;

/// Link abstracts the framed datagram channel away from the sense and
/// listen procedures. One Link talks to one peer.
pub trait Link {
    /// Send one frame. Returns the number of bytes put on the wire.
    fn send(&mut self, frame: &Frame) -> Result<usize>;

    /// Block for at most `timeout` waiting for one frame. Fails with
    /// `Error::Timeout` when nothing arrives and `Error::Communication`
    /// when the channel or the received datagram is broken.
    fn receive(&mut self, timeout: Duration) -> Result<Frame>;

    /// Prepare to be addressed by a remote initiator. Called once before a
    /// listen procedure starts receiving.
    fn bind(&mut self) -> Result<()> {
        Ok(())
    }

    /// Human readable peer address used in messages.
    fn peer(&self) -> String;

    /// Release the underlying channel.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<L: Link + ?Sized> Link for Box<L> {
    fn send(&mut self, frame: &Frame) -> Result<usize> {
        (**self).send(frame)
    }

    fn receive(&mut self, timeout: Duration) -> Result<Frame> {
        (**self).receive(timeout)
    }

    fn bind(&mut self) -> Result<()> {
        (**self).bind()
    }

    fn peer(&self) -> String {
        (**self).peer()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

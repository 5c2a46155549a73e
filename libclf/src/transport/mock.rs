// libclf/src/transport/mock.rs

//! Scripted in-memory link.

use std::io;
use std::time::Duration;

use crate::protocol::Frame;
use crate::transport::traits::Link;
use crate::types::BitrateType;
use crate::{Error, Result};

/// Scripted reply returned by the next `receive` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Deliver this frame.
    Frame(Frame),
    /// Fail with `Error::Timeout`.
    Timeout,
    /// Fail with `Error::Communication`.
    Communication(String),
}

/// Mock link for unit tests. It records sent frames and returns queued
/// replies; an empty queue behaves like a silent peer.
#[derive(Debug)]
pub struct MockLink {
    /// Frames passed to `send`, in call order.
    pub sent: Vec<Frame>,
    /// Pending replies, consumed front first.
    pub replies: Vec<MockReply>,
    /// Timeouts passed to `receive`, in call order.
    pub receive_timeouts: Vec<Duration>,
    /// Testing hook: make `bind` fail with this error kind.
    pub bind_error: Option<io::ErrorKind>,
    /// Set by a successful `bind`.
    pub bound: bool,
    /// Set by `close`.
    pub closed: bool,
    peer: String,
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLink {
    /// Silent link with the default peer address.
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            replies: Vec::new(),
            receive_timeouts: Vec::new(),
            bind_error: None,
            bound: false,
            closed: false,
            peer: "127.0.0.1:54321".to_string(),
        }
    }

    /// Override the address reported by `peer`.
    pub fn with_peer(mut self, peer: impl Into<String>) -> Self {
        self.peer = peer.into();
        self
    }

    /// Queue a frame reply.
    pub fn push_frame(&mut self, brty: BitrateType, payload: Vec<u8>) {
        self.replies.push(MockReply::Frame(Frame::new(brty, payload)));
    }

    /// Queue a timeout.
    pub fn push_timeout(&mut self) {
        self.replies.push(MockReply::Timeout);
    }

    /// Queue a communication error.
    pub fn push_communication_error(&mut self, msg: &str) {
        self.replies.push(MockReply::Communication(msg.to_string()));
    }

    /// Make `bind` fail with `kind`.
    pub fn set_bind_error(&mut self, kind: io::ErrorKind) {
        self.bind_error = Some(kind);
    }

    /// Sent frames in wire notation, e.g. `"106A 26"`.
    pub fn sent_tokens(&self) -> Vec<String> {
        self.sent.iter().map(|f| f.to_string()).collect()
    }
}

impl Link for MockLink {
    fn send(&mut self, frame: &Frame) -> Result<usize> {
        if self.closed {
            return Err(Error::Communication("link closed".into()));
        }
        self.sent.push(frame.clone());
        Ok(frame.encode().len())
    }

    fn receive(&mut self, timeout: Duration) -> Result<Frame> {
        self.receive_timeouts.push(timeout);
        if self.replies.is_empty() {
            return Err(Error::Timeout);
        }
        match self.replies.remove(0) {
            MockReply::Frame(frame) => Ok(frame),
            MockReply::Timeout => Err(Error::Timeout),
            MockReply::Communication(msg) => Err(Error::Communication(msg)),
        }
    }

    fn bind(&mut self) -> Result<()> {
        if let Some(kind) = self.bind_error {
            return Err(Error::Io(io::Error::from(kind)));
        }
        self.bound = true;
        Ok(())
    }

    fn peer(&self) -> String {
        self.peer.clone()
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

// libclf/src/transport/udp.rs

//! Datagram link carrying one wire token per UDP datagram.
//!
//! In sense mode the socket is bound to an ephemeral port and frames go to
//! the configured peer address. `bind` switches to listen mode: the socket
//! is rebound to the configured address itself and replies go to whoever
//! sent the last received frame. A link in sense mode drops datagrams
//! that do not come from the configured peer.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use log::{debug, trace};

use crate::protocol::Frame;
use crate::transport::traits::Link;
use crate::utils::Deadline;
use crate::{Error, Result};

/// Largest datagram accepted: a 255-byte payload in hex plus the tag.
const MAX_DATAGRAM: usize = 1024;
const MIN_READ_TIMEOUT: Duration = Duration::from_millis(1);

/// [`Link`] over a UDP socket.
#[derive(Debug)]
pub struct UdpLink {
    addr: SocketAddr,
    socket: UdpSocket,
    listening: bool,
    reply_to: Option<SocketAddr>,
}

impl UdpLink {
    /// Resolve `host:port` and open an unbound (ephemeral) socket towards it.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        let addr = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| Error::Communication(format!("cannot resolve {}:{}", host, port)))?;
        let socket = UdpSocket::bind(ephemeral_for(&addr))?;
        debug!("udp link to {} from {}", addr, socket.local_addr()?);
        Ok(Self {
            addr,
            socket,
            listening: false,
            reply_to: None,
        })
    }

    /// Configured peer address (the listen address once bound).
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Address of the underlying socket.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    fn destination(&self) -> SocketAddr {
        self.reply_to.unwrap_or(self.addr)
    }
}

fn ephemeral_for(addr: &SocketAddr) -> SocketAddr {
    match addr {
        SocketAddr::V4(_) => SocketAddr::from(([0, 0, 0, 0], 0)),
        SocketAddr::V6(_) => SocketAddr::from(([0u16; 8], 0)),
    }
}

impl Link for UdpLink {
    fn send(&mut self, frame: &Frame) -> Result<usize> {
        let wire = frame.encode();
        let dest = self.destination();
        trace!("udp >> {} {}", dest, frame);
        Ok(self.socket.send_to(&wire, dest)?)
    }

    fn receive(&mut self, timeout: Duration) -> Result<Frame> {
        let deadline = Deadline::after(timeout);
        let mut buf = [0u8; MAX_DATAGRAM];
        loop {
            let remaining = deadline.remaining().ok_or(Error::Timeout)?;
            self.socket
                .set_read_timeout(Some(remaining.max(MIN_READ_TIMEOUT)))?;

            let (n, from) = match self.socket.recv_from(&mut buf) {
                Ok(r) => r,
                Err(e)
                    if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) =>
                {
                    return Err(Error::Timeout);
                }
                Err(e) => return Err(Error::Communication(e.to_string())),
            };

            trace!("udp << {} {}", from, String::from_utf8_lossy(&buf[..n]));
            if self.listening {
                self.reply_to = Some(from);
            } else if from != self.addr {
                // A sensing link only talks to its configured peer.
                debug!("udp link dropped datagram from {}, expected {}", from, self.addr);
                continue;
            }
            return Frame::decode(&buf[..n]).map_err(|e| Error::Communication(e.to_string()));
        }
    }

    fn bind(&mut self) -> Result<()> {
        if self.listening {
            return Ok(());
        }
        self.socket = UdpSocket::bind(self.addr)?;
        self.listening = true;
        self.reply_to = None;
        debug!("udp link listening on {}", self.addr);
        Ok(())
    }

    fn peer(&self) -> String {
        self.addr.to_string()
    }

    fn close(&mut self) -> Result<()> {
        // The socket is released on drop; forget the listen-mode peer.
        self.reply_to = None;
        Ok(())
    }
}

//! UDP client for the effect server.

use std::io;
use std::net::UdpSocket;

use crate::packet::{LightCommand, MessageWriter};

/// Sends light commands to an effect server, one datagram per frame.
///
/// Fire-and-forget: nothing is read back and delivery is not guaranteed.
pub struct UdpClient {
    /// UDP socket reused between calls.
    socket: UdpSocket,
    /// Message writer with a reusable buffer.
    writer: MessageWriter,
}

impl UdpClient {
    /// Build a new UdpClient set to talk to a specific address.
    /// (try "valot.party:9909")
    pub fn new(addr: &str) -> io::Result<UdpClient> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect(addr)?;
        Ok(UdpClient {
            socket,
            writer: MessageWriter::new(),
        })
    }

    /// Send one frame of light commands, tagged with a nick.
    ///
    /// Returns the number of bytes sent.
    pub fn set(&mut self, nick: &str, lights: &[LightCommand]) -> io::Result<usize> {
        let msg = self.writer.write(nick, lights)?;
        self.socket.send(msg)
    }
}

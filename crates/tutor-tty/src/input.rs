#![forbid(unsafe_code)]

//! Unbuffered byte reader over the terminal.

use std::fs::File;
use std::io::{self, Read};
use std::os::fd::AsFd;
use std::time::Duration;

use tutor_core::input_parser::ByteSource;

/// Reads the terminal one byte at a time, with `poll(2)` for bounded waits.
#[derive(Debug)]
pub struct TtyInput {
    tty: File,
}

impl TtyInput {
    /// Wrap a terminal (or any readable descriptor).
    #[must_use]
    pub fn new(tty: File) -> Self {
        Self { tty }
    }

    /// Wait until a byte is readable. `false` on timeout or interruption.
    fn poll(&self, timeout: Duration) -> io::Result<bool> {
        let mut poll_fds = [nix::poll::PollFd::new(
            self.tty.as_fd(),
            nix::poll::PollFlags::POLLIN,
        )];
        let timeout_ms: u16 = timeout.as_millis().try_into().unwrap_or(u16::MAX);
        match nix::poll::poll(&mut poll_fds, nix::poll::PollTimeout::from(timeout_ms)) {
            Ok(n) => Ok(n > 0),
            Err(nix::errno::Errno::EINTR) => Ok(false),
            Err(e) => Err(io::Error::other(e)),
        }
    }
}

impl ByteSource for TtyInput {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.tty.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        if self.poll(timeout)? {
            self.read_byte()
        } else {
            Ok(None)
        }
    }
}

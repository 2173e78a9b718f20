#![forbid(unsafe_code)]

//! The native [`Backend`]: a [`TerminalSession`] plus a key decoder.

use std::io;
use std::os::fd::AsFd;

use tutor_core::backend::Backend;
use tutor_core::event::KeyEvent;
use tutor_core::input_parser::{DecoderConfig, KeyDecoder};

use crate::input::TtyInput;
use crate::session::TerminalSession;

/// Height of the terminal behind `fd`, or zero when it cannot be queried.
#[must_use]
pub fn terminal_rows<Fd: AsFd>(fd: Fd) -> u16 {
    rustix::termios::tcgetwinsize(fd).map_or(0, |ws| ws.ws_row)
}

/// Keys from the session's terminal, frames to its output.
#[derive(Debug)]
pub struct TtyBackend {
    session: TerminalSession,
    input: TtyInput,
    decoder: KeyDecoder,
}

impl TtyBackend {
    /// Wrap an entered session.
    ///
    /// # Errors
    ///
    /// Returns the error from duplicating the terminal descriptor.
    pub fn new(session: TerminalSession, decoder: DecoderConfig) -> io::Result<Self> {
        let input = session.input()?;
        Ok(Self {
            session,
            input,
            decoder: KeyDecoder::new(decoder),
        })
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    /// Give the session back, typically to [`leave`](TerminalSession::leave) it.
    #[must_use]
    pub fn into_session(self) -> TerminalSession {
        self.session
    }
}

impl Backend for TtyBackend {
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        self.decoder.read_key(&mut self.input)
    }

    fn rows(&self) -> u16 {
        self.session.rows()
    }

    fn present(&mut self, frame: &[u8]) -> io::Result<()> {
        self.session.present(frame)
    }
}

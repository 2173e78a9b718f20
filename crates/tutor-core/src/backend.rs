#![forbid(unsafe_code)]

//! The seam between the program loop and a terminal.
//!
//! The runtime drives any [`Backend`]: the native tty backend in production
//! and a headless backend with scripted input in tests.

use std::io;

use crate::event::KeyEvent;

/// Terminal height used when the real size cannot be determined.
pub const FALLBACK_ROWS: u16 = 24;

/// Smallest reported height taken at face value.
pub const MIN_ROWS: u16 = 5;

/// A key source plus a frame sink.
pub trait Backend {
    /// Block until the next key press.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns the underlying read error. The program loop treats it as a
    /// reason to stop.
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>>;

    /// Current terminal height in rows, as reported; zero when unknown.
    ///
    /// Queried once per frame so resizes take effect on the next key press.
    /// The runtime applies [`FALLBACK_ROWS`] to heights below [`MIN_ROWS`].
    fn rows(&self) -> u16;

    /// Write one complete frame.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    fn present(&mut self, frame: &[u8]) -> io::Result<()>;
}

impl<B: Backend + ?Sized> Backend for &mut B {
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        (**self).read_key()
    }

    fn rows(&self) -> u16 {
        (**self).rows()
    }

    fn present(&mut self, frame: &[u8]) -> io::Result<()> {
        (**self).present(frame)
    }
}

#![forbid(unsafe_code)]

//! Terminal session lifecycle with guaranteed cleanup.
//!
//! [`TerminalSession`] captures the line discipline of the terminal, switches
//! it to a mild raw mode (no canonical input, no echo, one byte per read),
//! enters the alternate screen and hides the cursor. Everything it changes is
//! undone by a single restore routine shared between:
//!
//! - [`TerminalSession::leave`] and [`Drop`],
//! - the signal listener (SIGINT, SIGTERM, SIGHUP),
//! - the panic hook.
//!
//! The routine is one-shot: whichever path gets there first restores the
//! terminal and the others find nothing left to do.
//!
//! # Example
//!
//! ```no_run
//! use tutor_tty::TerminalSession;
//!
//! let session = TerminalSession::enter()?;
//! session.present(b"\x1b[2J\x1b[Hhello")?;
//! session.leave();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::os::fd::AsFd;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use tutor_core::{debug, info, warn};
use tutor_render::ansi::{ALT_SCREEN_ENTER, ALT_SCREEN_LEAVE, CURSOR_HIDE, CURSOR_SHOW};

use crate::backend::terminal_rows;
use crate::input::TtyInput;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Session that is currently entered, for the panic hook.
static ACTIVE: Mutex<Option<RestoreHandle>> = Mutex::new(None);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Why a session could not be entered.
#[derive(Debug)]
pub enum SessionError {
    /// Standard input is not a terminal.
    NotATerminal,
    /// Reading or changing the terminal attributes failed.
    Termios(nix::Error),
    /// The termination signal listener could not be installed.
    Signals(io::Error),
    /// Writing the setup sequences failed.
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotATerminal => f.write_str("standard input is not a terminal"),
            Self::Termios(e) => write!(f, "terminal attributes: {e}"),
            Self::Signals(e) => write!(f, "signal handlers: {e}"),
            Self::Io(e) => write!(f, "terminal output: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotATerminal => None,
            Self::Termios(e) => Some(e),
            Self::Signals(e) | Self::Io(e) => Some(e),
        }
    }
}

impl From<nix::Error> for SessionError {
    fn from(e: nix::Error) -> Self {
        Self::Termios(e)
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// What a session changes on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Switch to the alternate screen buffer.
    pub alternate_screen: bool,
    /// Hide the cursor.
    pub hide_cursor: bool,
    /// Restore and exit on SIGINT, SIGTERM and SIGHUP.
    pub install_signal_handlers: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
            install_signal_handlers: true,
        }
    }
}

/// Everything needed to put the terminal back.
struct Restore {
    tty: File,
    original: Termios,
    out: SharedWriter,
    options: SessionOptions,
}

impl Restore {
    fn run(self) -> io::Result<()> {
        let written = {
            let mut out = lock(&self.out);
            let mut result = Ok(());
            if self.options.hide_cursor {
                result = result.and(out.write_all(CURSOR_SHOW));
            }
            if self.options.alternate_screen {
                result = result.and(out.write_all(ALT_SCREEN_LEAVE));
            }
            result.and(out.flush())
        };
        // Attributes go back even when the sequences could not be written.
        termios::tcsetattr(&self.tty, SetArg::TCSANOW, &self.original).map_err(io::Error::from)?;
        written
    }
}

/// Shared handle to a session's one-shot restore routine.
///
/// Cloning is cheap; all clones share the same routine.
#[derive(Clone)]
pub struct RestoreHandle {
    slot: Arc<Mutex<Option<Restore>>>,
}

impl fmt::Debug for RestoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestoreHandle")
            .field("restored", &self.is_restored())
            .finish()
    }
}

impl RestoreHandle {
    fn new(restore: Restore) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(restore))),
        }
    }

    /// Put the terminal back the way it was found.
    ///
    /// Only the first call on any clone does anything; it returns `true`.
    /// Failures are logged and swallowed.
    pub fn restore(&self) -> bool {
        let Some(restore) = lock(&self.slot).take() else {
            return false;
        };
        match restore.run() {
            Ok(()) => {
                info!("terminal restored");
            }
            Err(_err) => {
                warn!(error = %_err, "terminal restore incomplete");
            }
        }
        true
    }

    /// Whether the terminal has been restored already.
    #[must_use]
    pub fn is_restored(&self) -> bool {
        lock(&self.slot).is_none()
    }

    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

/// Exclusive use of the terminal, released on [`leave`](Self::leave) or drop.
pub struct TerminalSession {
    tty: File,
    out: SharedWriter,
    restore: RestoreHandle,
    signal_guard: Option<SignalGuard>,
}

impl fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSession")
            .field("tty", &self.tty)
            .field("restore", &self.restore)
            .field("signals", &self.signal_guard.is_some())
            .finish()
    }
}

impl TerminalSession {
    /// Take over standard input and standard output with default options.
    ///
    /// # Errors
    ///
    /// Fails before touching the terminal when standard input is not a
    /// terminal or its attributes cannot be read.
    pub fn enter() -> Result<Self, SessionError> {
        let tty = File::from(io::stdin().as_fd().try_clone_to_owned()?);
        Self::open(tty, Box::new(io::stdout()), SessionOptions::default())
    }

    /// Take over `tty`, writing control sequences and frames to `out`.
    ///
    /// # Errors
    ///
    /// See [`enter`](Self::enter). A failure after the attributes were
    /// changed restores them before returning.
    pub fn open(
        tty: File,
        out: Box<dyn Write + Send>,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        if !rustix::termios::isatty(&tty) {
            return Err(SessionError::NotATerminal);
        }
        let original = termios::tcgetattr(&tty)?;
        let mut raw = original.clone();
        raw.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

        let out: SharedWriter = Arc::new(Mutex::new(out));
        let restore = RestoreHandle::new(Restore {
            tty: tty.try_clone()?,
            original,
            out: Arc::clone(&out),
            options,
        });
        termios::tcsetattr(&tty, SetArg::TCSANOW, &raw)?;
        info!("terminal raw mode enabled");

        let mut session = Self {
            tty,
            out,
            restore,
            signal_guard: None,
        };
        // From here on, dropping `session` restores the terminal.
        session.write_setup(options)?;
        if options.install_signal_handlers {
            let guard = SignalGuard::new(session.restore.clone()).map_err(SessionError::Signals)?;
            session.signal_guard = Some(guard);
        }
        install_panic_hook();
        *lock(&ACTIVE) = Some(session.restore.clone());
        Ok(session)
    }

    fn write_setup(&self, options: SessionOptions) -> io::Result<()> {
        let mut out = lock(&self.out);
        if options.alternate_screen {
            out.write_all(ALT_SCREEN_ENTER)?;
            debug!("alternate screen enabled");
        }
        if options.hide_cursor {
            out.write_all(CURSOR_HIDE)?;
        }
        out.flush()
    }

    /// A handle to this session's restore routine.
    #[must_use]
    pub fn restore_handle(&self) -> RestoreHandle {
        self.restore.clone()
    }

    /// A byte reader over the session's terminal.
    ///
    /// # Errors
    ///
    /// Returns the error from duplicating the descriptor.
    pub fn input(&self) -> io::Result<TtyInput> {
        Ok(TtyInput::new(self.tty.try_clone()?))
    }

    /// Current terminal height as reported, zero when unknown.
    #[must_use]
    pub fn rows(&self) -> u16 {
        terminal_rows(&self.tty)
    }

    /// Write one frame in a single write and flush it.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn present(&self, frame: &[u8]) -> io::Result<()> {
        let mut out = lock(&self.out);
        out.write_all(frame)?;
        out.flush()
    }

    /// Restore the terminal and stop listening for signals.
    pub fn leave(mut self) {
        self.cleanup();
    }

    fn cleanup(&mut self) {
        self.restore.restore();
        self.signal_guard = None;
        let mut active = lock(&ACTIVE);
        if active.as_ref().is_some_and(|h| h.same_as(&self.restore)) {
            *active = None;
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    // The panic may have happened while ACTIVE was held.
    let handle = match ACTIVE.try_lock() {
        Ok(active) => active.clone(),
        Err(std::sync::TryLockError::Poisoned(p)) => p.into_inner().clone(),
        Err(std::sync::TryLockError::WouldBlock) => None,
    };
    if let Some(handle) = handle {
        handle.restore();
    }
}

/// Listener thread that restores the terminal and exits on termination
/// signals.
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl SignalGuard {
    fn new(restore: RestoreHandle) -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::Builder::new()
            .name("tutor-signals".into())
            .spawn(move || {
                for signal in signals.forever() {
                    if matches!(signal, SIGINT | SIGTERM | SIGHUP) {
                        warn!(signal, "termination signal received, cleaning up");
                        restore.restore();
                        std::process::exit(0);
                    }
                }
            })?;
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

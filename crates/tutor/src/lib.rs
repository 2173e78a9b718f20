#![forbid(unsafe_code)]

//! Terminal cheat-sheet viewers.
//!
//! A catalog of labelled sections is shown as a menu; picking one opens a
//! scrollable, color-coded reference. Navigation is vim-style (`j`/`k`,
//! `gg`/`G`, `%`). The `zshtutor` and `nvimtutor` binaries are thin wrappers
//! over [`run`] with a bundled catalog.
//!
//! With the `tracing` feature, logs go to standard error and are filtered
//! with `RUST_LOG` (default `info`). Redirect standard error when using it,
//! since it shares the terminal with the viewer.

pub mod catalogs;

use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

pub use tutor_content::{Catalog, CatalogEntry, CatalogError, ContentLine, Section};
pub use tutor_core::event::{KeyCode, KeyEvent};
pub use tutor_runtime::{App, ExitReason, Program, ProgramConfig};
pub use tutor_style::{Style, Theme, ThemeBuilder};
pub use tutor_tty::{SessionError, SessionOptions, TerminalSession, TtyBackend};

/// Why the viewer could not start.
#[derive(Debug)]
pub enum Error {
    /// The catalog could not be loaded.
    Catalog(CatalogError),
    /// The terminal could not be taken over.
    Session(SessionError),
    /// I/O failure while setting up.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Session(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Session(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for the viewer.
pub type Result<T> = std::result::Result<T, Error>;

/// Binary entry point: show `catalog_json` on the controlling terminal.
///
/// Exits with status 1 only when startup fails.
pub fn run(catalog_json: &str) -> ExitCode {
    init_logging();
    match run_catalog(catalog_json) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed to initialize: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Load a catalog, run the viewer until it ends, then restore the terminal.
///
/// After a normal quit the farewell line is printed on the primary screen.
///
/// # Errors
///
/// Returns an error when the catalog is invalid or the terminal cannot be
/// taken over. Nothing has been changed on the terminal in either case.
pub fn run_catalog(catalog_json: &str) -> Result<ExitReason> {
    let catalog = Catalog::from_json(catalog_json)?;
    let config = ProgramConfig::for_catalog(&catalog);
    let decoder = config.decoder;
    let session = TerminalSession::enter()?;
    let backend = TtyBackend::new(session, decoder)?;

    let mut program = Program::new(App::new(catalog, config), backend);
    let reason = program.run();
    let (app, backend) = program.into_parts();
    backend.into_session().leave();

    if reason == ExitReason::Quit {
        let mut stdout = io::stdout().lock();
        let _ = stdout
            .write_all(app.farewell().as_bytes())
            .and_then(|()| stdout.flush());
    }
    Ok(reason)
}

#[cfg(feature = "tracing")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging() {}

#![forbid(unsafe_code)]
//! Native Unix terminal backend for the tutor viewer.
//!
//! [`TerminalSession`] owns the line discipline of the controlling terminal
//! for as long as the viewer runs; [`TtyBackend`] adapts it to the runtime's
//! [`Backend`](tutor_core::backend::Backend) seam.
//!
//! ## Escape Sequence Reference
//!
//! | Feature           | Enable         | Disable        |
//! |-------------------|----------------|----------------|
//! | Alternate screen  | `CSI ? 1049 h` | `CSI ? 1049 l` |
//! | Cursor show/hide  | `CSI ? 25 h`   | `CSI ? 25 l`   |
//!
//! Raw mode here is deliberately mild: only canonical mode and echo are
//! cleared, so the terminal still turns Ctrl+C into SIGINT and output
//! post-processing keeps working.

#[cfg(unix)]
pub mod backend;
#[cfg(unix)]
pub mod input;
#[cfg(unix)]
pub mod session;

#[cfg(unix)]
pub use backend::{TtyBackend, terminal_rows};
#[cfg(unix)]
pub use input::TtyInput;
#[cfg(unix)]
pub use session::{RestoreHandle, SessionError, SessionOptions, TerminalSession};

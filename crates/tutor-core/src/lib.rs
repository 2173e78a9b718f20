#![forbid(unsafe_code)]

//! Core: key events, input decoding, the backend seam, and logging.

pub mod backend;
pub mod event;
pub mod input_parser;
pub mod key_sequence;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

#![forbid(unsafe_code)]

//! A [`Backend`] with scripted input and captured frames.

use std::io;

use tutor_content::Catalog;
use tutor_core::backend::Backend;
use tutor_core::event::KeyEvent;
use tutor_core::input_parser::{DecoderConfig, KeyDecoder, ScriptedSource};
use tutor_runtime::{App, ExitReason, Program, ProgramConfig};

use crate::strip_ansi;

/// Scripted keys in, frames out.
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    source: ScriptedSource,
    decoder: KeyDecoder,
    rows: u16,
    frames: Vec<Vec<u8>>,
    fail_present: bool,
}

impl HeadlessBackend {
    /// A terminal of `rows` rows typing `source`.
    #[must_use]
    pub fn new(source: ScriptedSource, rows: u16) -> Self {
        Self {
            source,
            decoder: KeyDecoder::new(DecoderConfig::default()),
            rows,
            frames: Vec::new(),
            fail_present: false,
        }
    }

    /// Decode escapes with `config` instead of the default timing.
    #[must_use]
    pub fn with_decoder(mut self, config: DecoderConfig) -> Self {
        self.decoder = KeyDecoder::new(config);
        self
    }

    /// The escape timing in use.
    #[must_use]
    pub fn decoder_config(&self) -> &DecoderConfig {
        self.decoder.config()
    }

    /// Make every [`present`](Backend::present) fail without capturing.
    #[must_use]
    pub fn failing_present(mut self) -> Self {
        self.fail_present = true;
        self
    }

    /// Change the reported height.
    pub fn set_rows(&mut self, rows: u16) {
        self.rows = rows;
    }

    /// Every frame presented so far.
    #[must_use]
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// The most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// The most recent frame without escape sequences.
    #[must_use]
    pub fn last_frame_text(&self) -> Option<String> {
        self.last_frame()
            .map(|frame| strip_ansi(&String::from_utf8_lossy(frame)))
    }

    /// Input steps not yet consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.source.remaining()
    }
}

impl Backend for HeadlessBackend {
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        self.decoder.read_key(&mut self.source)
    }

    fn rows(&self) -> u16 {
        self.rows
    }

    fn present(&mut self, frame: &[u8]) -> io::Result<()> {
        if self.fail_present {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "headless output closed"));
        }
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

/// Result of [`run_script`].
#[derive(Debug)]
pub struct ScriptRun {
    /// Why the loop stopped.
    pub reason: ExitReason,
    /// Final state.
    pub app: App,
    /// The backend, with its captured frames.
    pub backend: HeadlessBackend,
}

/// Run `catalog` with its own configuration until `source` runs out or the
/// viewer quits.
#[must_use]
pub fn run_script(catalog: Catalog, rows: u16, source: ScriptedSource) -> ScriptRun {
    let config = ProgramConfig::for_catalog(&catalog);
    run_with_config(catalog, config, rows, source)
}

/// Like [`run_script`], with an explicit configuration. The backend decodes
/// escapes with `config.decoder`.
#[must_use]
pub fn run_with_config(
    catalog: Catalog,
    config: ProgramConfig,
    rows: u16,
    source: ScriptedSource,
) -> ScriptRun {
    let backend = HeadlessBackend::new(source, rows).with_decoder(config.decoder);
    run_app(App::new(catalog, config), backend)
}

/// Run a prepared app on a prepared backend.
#[must_use]
pub fn run_app(app: App, backend: HeadlessBackend) -> ScriptRun {
    let mut program = Program::new(app, backend);
    let reason = program.run();
    let (app, backend) = program.into_parts();
    ScriptRun {
        reason,
        app,
        backend,
    }
}

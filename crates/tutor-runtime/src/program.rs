#![forbid(unsafe_code)]

//! Update/view state machine and the blocking program loop.
//!
//! [`App`] owns all view state: the menu navigator, and while a section is
//! open, that section's navigator and compiled lines. [`Program`] pairs an
//! `App` with a [`Backend`] and runs render → read key → update until the
//! user quits or input ends.
//!
//! ```text
//!            select (l, Enter, 1-9)
//!   Menu ───────────────────────────▶ Section(index)
//!    ▲  │                                  │
//!    │  │ q, x                             │ x, h, q, Esc
//!    │  ▼                                  │
//!    │ Quit                                │
//!    └─────────────────────────────────────┘
//! ```

use tracing::{debug, info, info_span, warn};
use tutor_content::{Catalog, DisplayLine, MarkupCompiler};
use tutor_core::backend::Backend;
use tutor_core::event::KeyEvent;
use tutor_render::FrameBuffer;
use tutor_render::ansi::{CLEAR_HOME, SGR_RESET_STR};

use crate::config::ProgramConfig;
use crate::menu;
use crate::navigation::{ListNavigator, MenuAction, SectionAction};
use crate::viewport::{render_footer, render_lines};

/// What the loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Keep going.
    None,
    /// Stop the loop.
    Quit,
}

/// Why [`Program::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user quit from the menu.
    Quit,
    /// Standard input reached end of file.
    EndOfInput,
    /// Reading a key failed.
    ReadError,
}

/// Which view is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The section list.
    Menu,
    /// An open section.
    Section {
        /// Catalog position of the section.
        index: usize,
        /// Cursor and scroll position within the compiled lines.
        nav: ListNavigator,
    },
}

/// All state of a running viewer.
#[derive(Debug, Clone)]
pub struct App {
    catalog: Catalog,
    config: ProgramConfig,
    compiler: MarkupCompiler,
    menu: ListNavigator,
    mode: Mode,
    lines: Vec<DisplayLine>,
}

impl App {
    /// Start at the top of the menu.
    #[must_use]
    pub fn new(catalog: Catalog, config: ProgramConfig) -> Self {
        let compiler = MarkupCompiler::new(config.theme, config.key_width);
        let menu = ListNavigator::new(catalog.len());
        Self {
            catalog,
            config,
            compiler,
            menu,
            mode: Mode::Menu,
            lines: Vec::new(),
        }
    }

    /// The catalog being shown.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// The active view.
    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The menu navigator. Kept while a section is open.
    #[must_use]
    pub fn menu(&self) -> &ListNavigator {
        &self.menu
    }

    /// Compiled lines of the open section; empty in the menu.
    #[must_use]
    pub fn lines(&self) -> &[DisplayLine] {
        match self.mode {
            Mode::Menu => &[],
            Mode::Section { .. } => &self.lines,
        }
    }

    /// Handle one key press.
    pub fn update(&mut self, key: &KeyEvent) -> Cmd {
        match &mut self.mode {
            Mode::Menu => match self.menu.menu_key(key) {
                MenuAction::None => Cmd::None,
                MenuAction::Open(index) => {
                    self.open_section(index);
                    Cmd::None
                }
                MenuAction::Quit => Cmd::Quit,
            },
            Mode::Section { nav, .. } => {
                if nav.section_key(key) == SectionAction::Exit {
                    self.close_section();
                }
                Cmd::None
            }
        }
    }

    fn open_section(&mut self, index: usize) {
        let Some(entry) = self.catalog.get(index) else {
            return;
        };
        self.compiler.compile_into(&entry.section, &mut self.lines);
        debug!(index, lines = self.lines.len(), "entering section");
        self.mode = Mode::Section {
            index,
            nav: ListNavigator::new(self.lines.len()),
        };
    }

    fn close_section(&mut self) {
        if let Mode::Section { index, .. } = self.mode {
            debug!(index, "leaving section");
        }
        self.mode = Mode::Menu;
        self.menu.clear_pending();
    }

    /// Draw the current view for a terminal of `rows` reported rows.
    ///
    /// Applies scroll-follow first, so the stored offset always matches what
    /// was last drawn.
    pub fn view(&mut self, frame: &mut FrameBuffer, rows: u16) {
        let rows = self.config.effective_rows(rows);
        let theme = &self.config.theme;
        frame.append(CLEAR_HOME);
        match &mut self.mode {
            Mode::Menu => {
                let visible = menu::visible_rows(&self.catalog, rows);
                self.menu.state_mut().follow(visible);
                let state = self.menu.state();
                menu::render_menu(frame, &self.catalog, state, visible, theme);
                render_footer(frame, state, &self.config.menu_legend, theme);
            }
            Mode::Section { nav, .. } => {
                let visible = self.config.section_visible(rows);
                nav.state_mut().follow(visible);
                let state = nav.state();
                render_lines(frame, state, visible, &self.lines, theme);
                render_footer(frame, state, &self.config.section_legend, theme);
            }
        }
    }

    /// Screen contents printed after a normal quit, once the terminal is
    /// restored.
    #[must_use]
    pub fn farewell(&self) -> String {
        let mut out = String::from_utf8_lossy(CLEAR_HOME).into_owned();
        self.config.theme.hint.push_sgr(&mut out);
        out.push_str("\n  ");
        out.push_str(&self.config.farewell);
        out.push_str("\n\n");
        out.push_str(SGR_RESET_STR);
        out
    }
}

/// An [`App`] driven by a [`Backend`].
#[derive(Debug)]
pub struct Program<B: Backend> {
    app: App,
    backend: B,
    frame: FrameBuffer,
}

impl<B: Backend> Program<B> {
    /// Pair an app with a backend.
    pub fn new(app: App, backend: B) -> Self {
        Self {
            app,
            backend,
            frame: FrameBuffer::new(),
        }
    }

    /// The app state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Take the app and backend back.
    pub fn into_parts(self) -> (App, B) {
        (self.app, self.backend)
    }

    /// Run until quit or end of input.
    ///
    /// Write failures are logged and the loop keeps going; only the input
    /// side can end it.
    pub fn run(&mut self) -> ExitReason {
        let span = info_span!("program", catalog = self.app.catalog().name());
        let _guard = span.enter();
        info!("program started");
        let reason = loop {
            self.render();
            let key = match self.backend.read_key() {
                Ok(Some(key)) => key,
                Ok(None) => break ExitReason::EndOfInput,
                Err(err) => {
                    warn!(error = %err, "key read failed");
                    break ExitReason::ReadError;
                }
            };
            if self.app.update(&key) == Cmd::Quit {
                break ExitReason::Quit;
            }
        };
        info!(?reason, "program finished");
        reason
    }

    fn render(&mut self) {
        let rows = self.backend.rows();
        self.app.view(&mut self.frame, rows);
        if self.frame.dropped() > 0 {
            debug!(dropped = self.frame.dropped(), "frame appends dropped");
        }
        let result = self.backend.present(self.frame.as_bytes());
        self.frame.clear();
        if let Err(err) = result {
            warn!(error = %err, "frame flush failed");
        }
    }
}

//! The `log` facade adapter: installs the renderer as the process-wide
//! console sink.
//!
//! The engine (the `log` crate) owns severity levels, level filtering,
//! source names and message interpolation; this module stamps the
//! wall-clock time, builds one [`Record`] per event and hands it to a
//! mutex-guarded [`LineRenderer`]. Filtering happens in the engine via
//! `log::set_max_level`, before a record ever reaches the sink.

use std::env;
use std::io::{self, Write};
use std::sync::Mutex;

use glint_core::{Record, Result};
use log::{Level, LevelFilter, Log, Metadata};

use crate::color::{AnsiPair, ColorTable};
use crate::renderer::LineRenderer;

/// Environment variable overriding the level filter, e.g. `GLINT_LOG=warn`.
pub const FILTER_ENV: &str = "GLINT_LOG";

/// `log::Log` implementation over a serialized [`LineRenderer`].
///
/// The renderer assumes a single writer; the mutex provides the
/// caller-side serialization its contract requires, since `log::Log`
/// must be `Sync`.
pub struct ConsoleLogger<W: Write + Send = io::Stdout> {
    renderer: Mutex<LineRenderer<W>>,
}

impl<W: Write + Send> ConsoleLogger<W> {
    pub fn new(renderer: LineRenderer<W>) -> Self {
        Self {
            renderer: Mutex::new(renderer),
        }
    }
}

impl<W: Write + Send> Log for ConsoleLogger<W> {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // The engine already applied the max-level filter.
        true
    }

    fn log(&self, record: &log::Record) {
        let record = Record::now(record.level(), record.target(), record.args().to_string());
        // A producer that panicked mid-render leaves the lock poisoned;
        // keep rendering anyway rather than going silent for the rest of
        // the process lifetime.
        let mut renderer = match self.renderer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        renderer.render(&record);
    }

    fn flush(&self) {
        if let Ok(mut renderer) = self.renderer.lock() {
            let _ = renderer.flush();
        }
    }
}

/// Configures and installs the console sink.
///
/// The renderer is built explicitly and handed to the engine once, at
/// startup; there is no lazily constructed global.
#[derive(Debug)]
pub struct Builder {
    colors: ColorTable,
    filter: LevelFilter,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            colors: ColorTable::default(),
            filter: LevelFilter::Debug,
        }
    }

    /// Builder with the level filter taken from `GLINT_LOG`, when set
    /// and parseable; the default otherwise.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(value) = env::var(FILTER_ENV) {
            if let Ok(filter) = value.parse::<LevelFilter>() {
                builder.filter = filter;
            }
        }
        builder
    }

    /// Replace the badge colors for one level.
    pub fn color(mut self, level: Level, pair: AnsiPair) -> Self {
        self.colors.set(level, pair);
        self
    }

    /// Maximum level the engine lets through to the sink.
    pub fn filter_level(mut self, filter: LevelFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Install the sink as the process-wide logger.
    ///
    /// Fails if another logger is already installed.
    pub fn try_init(self) -> Result<()> {
        let renderer = LineRenderer::with_colors(io::stdout(), self.colors);
        log::set_boxed_logger(Box::new(ConsoleLogger::new(renderer)))?;
        log::set_max_level(self.filter);
        Ok(())
    }
}

/// Install the console sink with the default colors and the `GLINT_LOG`
/// level override.
pub fn init() -> Result<()> {
    Builder::from_env().try_init()
}

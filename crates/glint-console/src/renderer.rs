//! The line renderer: decides, per record, how much of the decorated
//! header to print and how to indent the rest.
//!
//! A record continues the current *run* when both its level and its
//! source name match the previous record. Runs keep the message column
//! stable while dropping the parts of the header the reader already saw:
//!
//! ```text
//! [09:41:07] [MyApp]  EROR  First error
//!                           Second error
//! [09:41:08]                Third error
//! [09:41:08] [MyApp]  INFO  Info message
//! ```
//!
//! The renderer owns a single writer and is not internally synchronized;
//! callers with more than one producer thread must serialize `render`
//! calls themselves (see [`crate::logger::ConsoleLogger`]).

use std::io::Write;

use glint_core::{badge, Record, Result};
use log::Level;

use crate::color::{sgr, AnsiPair, ColorTable};
use crate::layout::{header_width, indent, tail_width, TIME_FORMAT};

/// How much of the header the first line of a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderMode {
    /// Timestamp, bracketed source name and colorized badge.
    Full,
    /// Timestamp only; the source/badge columns are blanked.
    TimeOnly,
    /// Blank padding the width of the whole header.
    Suppressed,
}

/// What the previous render call looked like.
///
/// `None`/empty fields are the initial "nothing rendered yet" state.
#[derive(Debug, Default)]
struct RenderState {
    last_level: Option<Level>,
    last_source: String,
    last_second: Option<i64>,
}

/// Terminal sink that renders records as colorized, aligned lines.
pub struct LineRenderer<W: Write> {
    out: W,
    colors: ColorTable,
    state: RenderState,
}

impl LineRenderer<std::io::Stdout> {
    /// Renderer over standard output with the default color table.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_colors(out, ColorTable::default())
    }

    pub fn with_colors(out: W, colors: ColorTable) -> Self {
        Self {
            out,
            colors,
            state: RenderState::default(),
        }
    }

    /// Replace the badge colors for one level. Affects only records
    /// rendered after the call.
    pub fn set_color(&mut self, level: Level, pair: AnsiPair) {
        self.colors.set(level, pair);
    }

    /// Render one record.
    ///
    /// Never fails: a write error is swallowed so that one unwritable
    /// record cannot poison the ones after it. State advances either way.
    pub fn render(&mut self, record: &Record) {
        let _ = self.write_record(record);
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn write_record(&mut self, record: &Record) -> std::io::Result<()> {
        let second = record.epoch_seconds();

        // A record continues the run only when neither the level nor the
        // source name changed.
        let same_run = self.state.last_level == Some(record.level)
            && self.state.last_source == record.source;
        let same_second = self.state.last_second == Some(second);

        // State advances before any output: the comparisons above always
        // describe the previous call, and a failed write still counts as
        // "last rendered". There is no rollback.
        self.state.last_level = Some(record.level);
        self.state.last_source.clone_from(&record.source);
        self.state.last_second = Some(second);

        let mode = if !same_run {
            HeaderMode::Full
        } else if !same_second {
            HeaderMode::TimeOnly
        } else {
            HeaderMode::Suppressed
        };

        // A trailing newline yields a trailing empty line, kept on
        // purpose. Continuation lines never repeat any header fragment.
        for (index, line) in record.message.split('\n').enumerate() {
            match mode {
                HeaderMode::Full if index == 0 => self.write_full(record, line)?,
                HeaderMode::TimeOnly if index == 0 => self.write_time_only(record, line)?,
                _ => self.write_suppressed(record, line)?,
            }
        }
        Ok(())
    }

    /// `[HH:MM:SS] [source] BADGE text`
    fn write_full(&mut self, record: &Record, line: &str) -> std::io::Result<()> {
        let stamp = record.timestamp.format(TIME_FORMAT);
        write!(
            self.out,
            "{dim}[{stamp}]{reset} {white}[{reset}{bold}{source}{reset}{white}]{reset} ",
            dim = sgr::DIM,
            reset = sgr::RESET,
            white = sgr::WHITE,
            bold = sgr::BOLD_WHITE,
            source = record.source,
        )?;
        self.write_badge(record.level)?;
        writeln!(self.out, " {line}")
    }

    /// `[HH:MM:SS]` followed by blanks where the source and badge were.
    /// Carries no badge, so no color codes either.
    fn write_time_only(&mut self, record: &Record, line: &str) -> std::io::Result<()> {
        let stamp = record.timestamp.format(TIME_FORMAT);
        writeln!(
            self.out,
            "[{stamp}] {pad}{line}",
            pad = indent(tail_width(&record.source)),
        )
    }

    /// Blanks the width of the whole header.
    fn write_suppressed(&mut self, record: &Record, line: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}{line}", indent(header_width(&record.source)))
    }

    fn write_badge(&mut self, level: Level) -> std::io::Result<()> {
        let pair = self.colors.get(level);
        if pair.is_none() {
            write!(self.out, "{}", badge(level))
        } else {
            write!(
                self.out,
                "{}{}{}{}",
                pair.background(),
                pair.foreground(),
                badge(level),
                sgr::RESET
            )
        }
    }
}

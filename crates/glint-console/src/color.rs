//! Badge colors
//!
//! The outbound contract is raw SGR bytes on the stream, so colors are
//! kept as the escape strings themselves rather than routed through a
//! style library.

use log::Level;

/// SGR fragments used by the renderer.
pub mod sgr {
    pub const RESET: &str = "\x1b[0m";

    /// Bright black; the timestamp field.
    pub const DIM: &str = "\x1b[90m";
    /// White; the brackets around the source name.
    pub const WHITE: &str = "\x1b[37m";
    /// Bold white; the source name itself.
    pub const BOLD_WHITE: &str = "\x1b[1;37m";

    // --- Badge backgrounds ---
    pub const RED_BG: &str = "\x1b[41m";
    pub const GREEN_BG: &str = "\x1b[42m";
    pub const YELLOW_BG: &str = "\x1b[43m";
    pub const CYAN_BG: &str = "\x1b[46m";

    // --- Badge foregrounds ---
    pub const BLACK_FG: &str = "\x1b[30m";
    pub const WHITE_FG: &str = "\x1b[37m";
}

/// One background+foreground SGR pair, wrapped around a level badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiPair {
    background: &'static str,
    foreground: &'static str,
}

impl AnsiPair {
    /// Neutral pair: the badge is emitted without any escape bytes.
    pub const NONE: AnsiPair = AnsiPair::new("", "");

    pub const fn new(background: &'static str, foreground: &'static str) -> Self {
        Self {
            background,
            foreground,
        }
    }

    pub fn is_none(&self) -> bool {
        self.background.is_empty() && self.foreground.is_empty()
    }

    pub fn background(&self) -> &'static str {
        self.background
    }

    pub fn foreground(&self) -> &'static str {
        self.foreground
    }
}

/// Per-level badge colors.
///
/// Levels without a slot of their own (`Trace` today) share the neutral
/// fallback, matching their ` UNKN ` badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    error: AnsiPair,
    warn: AnsiPair,
    info: AnsiPair,
    debug: AnsiPair,
    fallback: AnsiPair,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            error: AnsiPair::new(sgr::RED_BG, sgr::WHITE_FG),
            warn: AnsiPair::new(sgr::YELLOW_BG, sgr::BLACK_FG),
            info: AnsiPair::new(sgr::GREEN_BG, sgr::BLACK_FG),
            debug: AnsiPair::new(sgr::CYAN_BG, sgr::BLACK_FG),
            fallback: AnsiPair::NONE,
        }
    }
}

impl ColorTable {
    pub fn get(&self, level: Level) -> AnsiPair {
        match level {
            Level::Error => self.error,
            Level::Warn => self.warn,
            Level::Info => self.info,
            Level::Debug => self.debug,
            _ => self.fallback,
        }
    }

    /// Replace the pair for one level.
    pub fn set(&mut self, level: Level, pair: AnsiPair) {
        match level {
            Level::Error => self.error = pair,
            Level::Warn => self.warn = pair,
            Level::Info => self.info = pair,
            Level::Debug => self.debug = pair,
            _ => self.fallback = pair,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let table = ColorTable::default();
        assert_eq!(
            table.get(Level::Info),
            AnsiPair::new(sgr::GREEN_BG, sgr::BLACK_FG)
        );
        assert_eq!(
            table.get(Level::Warn),
            AnsiPair::new(sgr::YELLOW_BG, sgr::BLACK_FG)
        );
        assert_eq!(
            table.get(Level::Error),
            AnsiPair::new(sgr::RED_BG, sgr::WHITE_FG)
        );
        assert_eq!(
            table.get(Level::Debug),
            AnsiPair::new(sgr::CYAN_BG, sgr::BLACK_FG)
        );
    }

    #[test]
    fn test_trace_uses_neutral_fallback() {
        let table = ColorTable::default();
        assert!(table.get(Level::Trace).is_none());
    }

    #[test]
    fn test_set_replaces_one_slot() {
        let mut table = ColorTable::default();
        let blue = AnsiPair::new("\x1b[44m", sgr::WHITE_FG);
        table.set(Level::Info, blue);
        assert_eq!(table.get(Level::Info), blue);
        assert_eq!(
            table.get(Level::Warn),
            AnsiPair::new(sgr::YELLOW_BG, sgr::BLACK_FG)
        );
    }
}

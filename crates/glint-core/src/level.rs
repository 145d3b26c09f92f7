//! Fixed-width level badges

use log::Level;

/// Visible width of every badge returned by [`badge`].
pub const BADGE_WIDTH: usize = 6;

/// Console badge for a level: six characters, level name centered.
///
/// The engine owns the level enum; the sink only maps levels to glyphs.
/// Levels without a badge of their own (`Trace` today) fall back to
/// ` UNKN `.
pub fn badge(level: Level) -> &'static str {
    match level {
        Level::Info => " INFO ",
        Level::Warn => " WARN ",
        Level::Error => " EROR ",
        Level::Debug => " DEBG ",
        _ => " UNKN ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_texts() {
        assert_eq!(badge(Level::Info), " INFO ");
        assert_eq!(badge(Level::Warn), " WARN ");
        assert_eq!(badge(Level::Error), " EROR ");
        assert_eq!(badge(Level::Debug), " DEBG ");
        assert_eq!(badge(Level::Trace), " UNKN ");
    }

    #[test]
    fn test_badges_are_fixed_width() {
        for level in [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ] {
            assert_eq!(badge(level).len(), BADGE_WIDTH);
        }
    }
}

//! ANSI escape code handling utilities
//!
//! Column arithmetic in the sink counts visible terminal cells, so escape
//! bytes must never contribute to a width. Source names are measured
//! through [`visible_width`]; anything a caller smuggles into a name
//! (color codes, East Asian wide characters) still lines up.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Regex pattern for ANSI escape sequences.
///
/// Covers:
/// - CSI sequences: ESC [ ... letter (colors, cursor, etc.)
/// - OSC sequences: ESC ] ... BEL or ST (hyperlinks, titles)
/// - Simple escapes: ESC letter
static ANSI_ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \x1b\[[0-9;?]*[A-Za-z]               # CSI sequences
        | \x1b\][^\x07\x1b]*(?:\x07|\x1b\\)  # OSC sequences
        | \x1b[A-Za-z]                       # Simple escapes
        ",
    )
    .expect("ANSI regex pattern is valid")
});

/// Strip all ANSI escape sequences from a string.
///
/// # Examples
///
/// ```
/// use glint_core::strip_ansi_codes;
///
/// let input = "\x1b[31mred text\x1b[0m";
/// assert_eq!(strip_ansi_codes(input), "red text");
/// ```
pub fn strip_ansi_codes(input: &str) -> String {
    ANSI_ESCAPE_PATTERN.replace_all(input, "").into_owned()
}

/// Check if a string contains ANSI escape sequences.
pub fn contains_ansi_codes(input: &str) -> bool {
    ANSI_ESCAPE_PATTERN.is_match(input)
}

/// Width of a string in terminal cells.
///
/// Escape sequences contribute nothing; East Asian wide characters count
/// two cells.
pub fn visible_width(input: &str) -> usize {
    if contains_ansi_codes(input) {
        strip_ansi_codes(input).width()
    } else {
        input.width()
    }
}

//! Header column arithmetic
//!
//! Suppressed and continuation lines are padded so their text starts in
//! the same column as a fully rendered header's message. All widths are
//! visible terminal cells; escape bytes never count (see
//! [`glint_core::visible_width`]).

use glint_core::level::BADGE_WIDTH;
use glint_core::visible_width;

/// Visible width of the `[HH:MM:SS]` field.
pub const STAMP_WIDTH: usize = 10;

/// Timestamp format rendered inside the brackets.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Width of the `[source] BADGE ` run that follows the timestamp field:
/// two brackets, the separating space, the badge and its trailing space.
pub fn tail_width(source: &str) -> usize {
    visible_width(source) + 2 + 1 + BADGE_WIDTH + 1
}

/// Width of the whole header prefix `[HH:MM:SS] [source] BADGE `.
pub fn header_width(source: &str) -> usize {
    STAMP_WIDTH + 1 + tail_width(source)
}

/// Blank padding of the given width.
pub fn indent(width: usize) -> String {
    " ".repeat(width)
}

//! # glint-core - Core Domain Types
//!
//! Foundation crate for glint. Provides the record type the console sink
//! consumes, level badge mapping, ANSI escape utilities, and error
//! handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (log, chrono, thiserror, regex, unicode-width).
//!
//! ## Public API
//!
//! ### Records (`record`)
//! - [`Record`] - One log event: level, source name, timestamp, message
//!
//! ### Levels (`level`)
//! - [`badge()`] - Fixed 6-character console badge for a [`log::Level`]
//!
//! ### ANSI (`ansi`)
//! - [`strip_ansi_codes()`], [`contains_ansi_codes()`] - Escape stripping
//! - [`visible_width()`] - Terminal-cell width, escape bytes ignored
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Install/IO errors; rendering itself is infallible
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod ansi;
pub mod error;
pub mod level;
pub mod record;

/// Prelude for common imports
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use log::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use ansi::{contains_ansi_codes, strip_ansi_codes, visible_width};
pub use error::{Error, Result};
pub use level::{badge, BADGE_WIDTH};
pub use record::Record;

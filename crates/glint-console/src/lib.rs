//! # glint-console - Console sink
//!
//! Renders leveled log records as colorized, aligned terminal lines and
//! collapses the header when consecutive records repeat the same level
//! and source name. Repeated records within one second keep only their
//! indent; a new second re-prints the timestamp; a level or source change
//! brings the full header back.
//!
//! Install through the builder, then log through the `log` facade:
//!
//! ```no_run
//! glint_console::Builder::new()
//!     .filter_level(log::LevelFilter::Info)
//!     .try_init()
//!     .expect("no other logger installed");
//!
//! log::info!(target: "MyApp", "ready");
//! ```

pub mod color;
pub mod layout;
pub mod logger;
pub mod renderer;

pub use color::{AnsiPair, ColorTable};
pub use logger::{init, Builder, ConsoleLogger, FILTER_ENV};
pub use renderer::LineRenderer;

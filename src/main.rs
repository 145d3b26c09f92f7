//! glint - console demo for the de-duplicating log renderer
//!
//! This is the binary entry point. The sink itself lives in the library
//! crates; this program installs it and plays back a short scenario so
//! the three header modes are visible in one screen of output.

use std::time::Duration;

use clap::Parser;
use glint_core::prelude::*;
use log::LevelFilter;

/// Console demo for the glint log sink
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "De-duplicating colorized console log sink", long_about = None)]
struct Args {
    /// Maximum level rendered to the console (overrides GLINT_LOG)
    #[arg(long, value_name = "LEVEL")]
    level: Option<LevelFilter>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut builder = glint_console::Builder::from_env();
    if let Some(level) = args.level {
        builder = builder.filter_level(level);
    }
    builder.try_init()?;

    error!(target: "MyApp", "First error");
    error!(target: "MyApp", "Second error");
    error!(target: "MyApp", "Third error");
    std::thread::sleep(Duration::from_secs(1));
    error!(target: "MyApp", "Fourth error after 1 second");
    info!(target: "MyApp", "Info message");

    // Multi-line payloads keep their continuation lines in the message
    // column.
    warn!(target: "MyApp", "config reloaded\nwatching 3 paths\nprofile: dev");
    debug!(target: "Worker", "queue drained");

    log::logger().flush();
    Ok(())
}

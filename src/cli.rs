// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

use crate::scene::FilterMode;

/// Command-line arguments for `skilltree`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "skilltree",
    version,
    about = "Track course completion across a prerequisite map.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (TOML).
    ///
    /// Default: `Skilltree.toml` in the current working directory. A missing
    /// file is not an error; built-in defaults apply instead.
    #[arg(long, value_name = "PATH", default_value = "Skilltree.toml")]
    pub config: String,

    /// CSV file with the course catalog to load at startup.
    ///
    /// If omitted, the built-in starter curriculum is loaded.
    #[arg(long, value_name = "PATH")]
    pub courses: Option<String>,

    /// Initial visibility filter for the map.
    #[arg(long, value_enum, value_name = "MODE", default_value_t = FilterMode::All)]
    pub filter: FilterMode,

    /// Render the map and progress once, then exit (no interactive console).
    #[arg(long)]
    pub once: bool,

    /// Load and validate the catalog, print a summary, but render no map.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SKILLTREE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

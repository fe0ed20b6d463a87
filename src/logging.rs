// src/logging.rs

//! Tracing setup for the `skilltree` binary.
//!
//! Level resolution order:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `SKILLTREE_LOG` environment variable (full `EnvFilter` directives,
//!    e.g. "debug" or "skilltree=debug,reqwest=warn")
//! 3. default to `info`

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` flag is given.
pub const LOG_ENV: &str = "SKILLTREE_LOG";

/// Install the global subscriber. Call once, from `main`.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let directive = match cli_level {
        Some(level) => level.as_directive().to_string(),
        None => std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_string()),
    };

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;

    fmt().with_env_filter(filter).with_target(true).init();

    Ok(())
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

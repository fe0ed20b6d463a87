// src/console/mod.rs

//! Line-oriented console surface.
//!
//! - [`commands`] parses raw lines into typed session commands.
//! - [`reader`] owns the stdin reader task that feeds the session runtime.

pub mod commands;
pub mod reader;

pub use commands::{Command, LoadSource, parse_command};
pub use reader::spawn_reader;

// src/session/mod.rs

//! Session controller for the tracker.
//!
//! This module ties together:
//! - the mutable session state (catalog, completed set, filter, search)
//! - the confirm-gated reset flow
//! - the main runtime event loop that reacts to:
//!   - parsed console commands
//!   - finished generation requests
//!   - shutdown signals
//!
//! State and its mutations live in [`state`]; the async event loop is
//! implemented in [`runtime`].

use crate::console::Command;
use crate::generate::GenerationOutcome;

/// Events flowing into the session runtime from the console reader, the
/// generation worker, and signal handling.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A parsed console command line.
    Command(Command),
    /// The generation worker finished a request, one way or the other.
    GenerationFinished { outcome: GenerationOutcome },
    /// Graceful shutdown requested (e.g. Ctrl-C or stdin EOF).
    ShutdownRequested,
}

pub mod runtime;
pub mod state;

pub use runtime::SessionRuntime;
pub use state::{ResetOutcome, Session, ToggleOutcome};

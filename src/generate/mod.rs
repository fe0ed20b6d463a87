// src/generate/mod.rs

//! Curriculum generation boundary.
//!
//! This module is responsible for turning a topic string into a course list
//! via an external model API, and reporting back to the session runtime via
//! `SessionEvent`s.
//!
//! - [`client`] owns the HTTP client for the `generateContent` endpoint.
//! - [`worker`] provides the `GeneratorBackend` trait, the concrete
//!   `HttpGeneratorBackend` the runtime uses in production, and the
//!   background worker loop; tests can replace the backend with a fake
//!   implementation.

use crate::catalog::Course;

/// Outcome of one finished generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The model answered with a parseable course array (possibly empty).
    Generated(Vec<Course>),
    /// The request failed; the reason is already user-presentable.
    Failed(String),
}

pub mod client;
pub mod worker;

pub use client::{API_KEY_ENV, API_KEY_ENV_FALLBACK, GeminiClient};
pub use worker::{GenerationJob, GeneratorBackend, HttpGeneratorBackend, spawn_generator};

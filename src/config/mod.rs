// src/config/mod.rs

//! Settings loading and validation for skilltree.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a settings file from disk, tolerating absence (`loader.rs`).
//! - Validate basic invariants like positive node dimensions (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_from_path, load_or_default};
pub use model::{ConfigFile, GenerateSection, LayoutSection};
pub use validate::validate_config;

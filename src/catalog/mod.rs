// src/catalog/mod.rs

//! Course catalog: data model, import and validation.
//!
//! Responsibilities:
//! - Define `Course` and the ordered `Catalog` registry (`model.rs`).
//! - Parse CSV catalogs and load them from disk (`csv.rs`).
//! - Provide the built-in starter curriculum (`builtin.rs`).
//! - Report load-time problems like dangling prerequisites (`validate.rs`).

pub mod builtin;
pub mod csv;
pub mod model;
pub mod validate;

pub use builtin::default_courses;
pub use csv::{EXAMPLE_CSV, load_csv_path, parse_csv};
pub use model::{Catalog, Course};
pub use validate::{LoadReport, check_courses};

// src/config/mod.rs

//! Job-file loading and validation.
//!
//! - [`model`] holds the serde data model for the TOML job file.
//! - [`loader`] reads and deserializes a job file from disk.
//! - [`validate`] turns a [`RawJobFile`] into a validated [`JobFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{GroupSpec, JobFile, JobSection, RawJobFile, VertexSpec};

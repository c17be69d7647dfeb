//! Version catalog: the ordered list of documented versions
//!
//! # Modules
//!
//! - [`types`]: `VersionEntry` and `VersionCatalog`
//! - [`builder`]: Builds a catalog from the versions published on a site
//! - [`semver`]: Version parsing and newest-first ordering
//! - [`error`]: Error types for catalog loading and building

pub mod builder;
pub mod error;
pub mod semver;
pub mod types;

pub use types::{LATEST_LABEL, VersionCatalog, VersionEntry};

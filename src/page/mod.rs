//! Per-page context derived from the page location
//!
//! - [`context`]: `PageContext` and the current version resolver
//! - [`status`]: Whether the viewed version is latest, development or outdated

pub mod context;
pub mod status;

pub use context::{PageContext, PageError, normalize_location, resolve_current_version};
pub use status::{VersionStatus, classify};

//! Publishing glue for a multi-version documentation site
//!
//! - [`stamp`]: Renders selector and banner into every published page
//! - [`redirect`]: Root `index.html` that forwards to the latest version
//! - [`error`]: Site error type

pub mod error;
pub mod redirect;
pub mod stamp;

pub use error::SiteError;
pub use stamp::{StampReport, stamp_page, stamp_site};

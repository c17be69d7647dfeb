//! Markup produced for the host page
//!
//! - [`selector`]: The `<select>` drop-down of catalog versions
//! - [`banner`]: The outdated-version banner
//! - [`inject`]: Placing both into a host HTML page
//! - [`escape`]: HTML escaping for interpolated values

pub mod banner;
pub mod escape;
pub mod inject;
pub mod selector;

pub use banner::{BANNER_ID, outdated_banner};
pub use inject::{HostPage, InjectError, PageInjector};
pub use selector::{SELECTOR_ID, render_selector};

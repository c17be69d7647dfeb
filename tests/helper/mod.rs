//! Shared test utilities

pub mod site;

#[allow(unused_imports)]
pub use site::{PublishedSite, host_page};

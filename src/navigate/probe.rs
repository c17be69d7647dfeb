//! Probe trait for checking that a target page exists before navigating

#[cfg(test)]
use mockall::automock;

use crate::navigate::error::ProbeError;

/// Trait for checking whether a documentation URL can be served
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ExistenceProbe: Send + Sync {
    /// Check whether `url` exists
    ///
    /// # Arguments
    /// * `url` - Site-absolute path of the page (e.g., "/docs/0.0.3/guide/index.html")
    ///
    /// # Returns
    /// * `Ok(true)` - The page exists
    /// * `Ok(false)` - The page is known to be missing
    /// * `Err(ProbeError)` - The probe could not tell
    async fn exists(&self, url: &str) -> Result<bool, ProbeError>;
}

//! Existence probe against a published site on disk

use std::path::{Path, PathBuf};

use crate::navigate::error::ProbeError;
use crate::navigate::probe::ExistenceProbe;

/// Resolves URLs under `url_root` to files under `site_root`
pub struct FsProbe {
    site_root: PathBuf,
    url_root: String,
}

impl FsProbe {
    pub fn new(site_root: &Path, url_root: &str) -> Self {
        Self {
            site_root: site_root.to_path_buf(),
            url_root: url_root.trim_end_matches('/').to_string(),
        }
    }

    /// Map a URL to a file path; `None` if the URL is outside the root
    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let relative = url.strip_prefix(&self.url_root)?.strip_prefix('/')?;
        if relative.split('/').any(|segment| segment == "..") {
            return None;
        }
        Some(self.site_root.join(relative))
    }
}

#[async_trait::async_trait]
impl ExistenceProbe for FsProbe {
    async fn exists(&self, url: &str) -> Result<bool, ProbeError> {
        let Some(path) = self.resolve(url) else {
            return Ok(false);
        };

        match tokio::fs::metadata(&path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

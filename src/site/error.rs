use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::error::CatalogError;
use crate::render::InjectError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Inject(#[from] InjectError),

    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| SiteError::Io { path, source }
    }
}

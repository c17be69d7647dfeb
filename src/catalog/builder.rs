//! Catalog generation from the version directories of a published site

use std::path::Path;

use tracing::debug;

use crate::catalog::error::CatalogError;
use crate::catalog::semver::sort_newest_first;
use crate::catalog::types::{LATEST_LABEL, VersionCatalog, VersionEntry};
use crate::config::DevelopmentConfig;

/// List the version directories published under `site_root`.
///
/// The development directory and hidden entries (e.g. `.git`) are excluded;
/// the result is in directory order.
pub fn published_versions(
    site_root: &Path,
    development: &DevelopmentConfig,
) -> Result<Vec<String>, CatalogError> {
    let io_error = |source| CatalogError::Io {
        path: site_root.to_path_buf(),
        source,
    };

    let mut versions = Vec::new();
    for entry in std::fs::read_dir(site_root).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        if !entry.file_type().map_err(io_error)?.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping non UTF-8 directory {:?}", entry.path());
            continue;
        };

        if name.starts_with('.') || name == development.id {
            continue;
        }
        versions.push(name);
    }

    Ok(versions)
}

/// Build the catalog for a set of published versions.
///
/// Layout: the development entry, then the newest version under the
/// "latest" label (when anything is published), then every version newest first.
pub fn build_catalog(published: Vec<String>, development: &DevelopmentConfig) -> VersionCatalog {
    let sorted = sort_newest_first(published);

    let mut entries = Vec::with_capacity(sorted.len() + 2);
    entries.push(VersionEntry::new(&development.id, &development.label));

    if let Some(newest) = sorted.first() {
        entries.push(VersionEntry::new(newest, LATEST_LABEL));
    }

    entries.extend(sorted.into_iter().map(|v| VersionEntry::new(v.clone(), v)));

    VersionCatalog::new(entries)
}

/// Scan `site_root` and build its catalog
pub fn catalog_for_site(
    site_root: &Path,
    development: &DevelopmentConfig,
) -> Result<VersionCatalog, CatalogError> {
    let published = published_versions(site_root, development)?;
    debug!("Published versions in {:?}: {:?}", site_root, published);
    Ok(build_catalog(published, development))
}

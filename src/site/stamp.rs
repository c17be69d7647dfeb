//! Stamping selector and banner markup into a published site

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::catalog::VersionCatalog;
use crate::catalog::builder::catalog_for_site;
use crate::config::{CATALOG_FILE_NAME, SelectorConfig};
use crate::page::PageContext;
use crate::render::{InjectError, PageInjector, outdated_banner, render_selector};
use crate::site::error::SiteError;
use crate::site::redirect::{load_template, render_redirect};

/// Summary of a stamping run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StampReport {
    pub catalog: VersionCatalog,
    /// Version directories that were processed
    pub versions: usize,
    /// Pages carrying the selector after the run
    pub pages_stamped: usize,
    /// Pages that do not follow the host page contract
    pub pages_skipped: usize,
    /// Whether the root redirect page was written
    pub redirect_written: bool,
}

/// Render selector and banner for `context` into one host page
pub fn stamp_page(
    html: &str,
    injector: &PageInjector,
    catalog: &VersionCatalog,
    context: &PageContext,
    project_name: Option<&str>,
) -> Result<String, InjectError> {
    let selector = render_selector(catalog, context.current_version());
    let html = injector.inject_selector(html, &selector)?;

    let banner = outdated_banner(catalog, context, project_name);
    injector.insert_banner(&html, banner.as_deref())
}

/// Stamp every published version under `site_root`.
///
/// Builds the catalog from the version directories, stamps each HTML page,
/// then writes the catalog file and the root redirect page.
pub fn stamp_site(site_root: &Path, config: &SelectorConfig) -> Result<StampReport, SiteError> {
    let catalog = catalog_for_site(site_root, &config.development)?;
    if catalog.is_empty() {
        warn!("No published versions under {:?}", site_root);
    }
    let injector = PageInjector::new(&config.host)?;

    let mut report = StampReport::default();

    for id in catalog.ids() {
        let version_dir = site_root.join(id);
        if !version_dir.is_dir() {
            debug!("No directory for version {}", id);
            continue;
        }
        report.versions += 1;

        for page_path in html_pages(&version_dir)? {
            let Some(page) = relative_page(&version_dir, &page_path) else {
                debug!("Skipping non UTF-8 path {:?}", page_path);
                continue;
            };

            if stamp_file(&page_path, &page, id, &injector, &catalog, config)? {
                report.pages_stamped += 1;
            } else {
                report.pages_skipped += 1;
            }
        }
    }

    let catalog_path = site_root.join(CATALOG_FILE_NAME);
    std::fs::write(&catalog_path, catalog.to_json()?).map_err(SiteError::io(&catalog_path))?;

    if let Some(latest) = catalog.latest() {
        let template = load_template(config.redirect_template.as_deref())?;
        let index_path = site_root.join("index.html");
        std::fs::write(&index_path, render_redirect(&template, &latest.id))
            .map_err(SiteError::io(&index_path))?;
        report.redirect_written = true;
    }

    info!(
        "Stamped {} pages across {} versions ({} skipped)",
        report.pages_stamped, report.versions, report.pages_skipped
    );

    report.catalog = catalog;
    Ok(report)
}

/// Stamp a single file; returns false when the page was skipped
fn stamp_file(
    path: &Path,
    page: &str,
    version_id: &str,
    injector: &PageInjector,
    catalog: &VersionCatalog,
    config: &SelectorConfig,
) -> Result<bool, SiteError> {
    let html = std::fs::read_to_string(path).map_err(SiteError::io(path))?;

    // Attributes declared by the page take precedence over the configured root
    let host = injector.read_host_attributes(&html);
    let root = host
        .as_ref()
        .map_or(config.url_root.as_str(), |host| host.root.as_str());
    if let Some(declared) = host.as_ref().map(|host| host.page.trim_start_matches('/'))
        && declared != page
    {
        warn!("Skipping {:?}: declares page {:?} but is {:?}", path, declared, page);
        return Ok(false);
    }

    let location = format!("{}/{}/{}", root.trim_end_matches('/'), version_id, page);
    let context = match PageContext::from_location(root, page, &location) {
        Ok(context) if context.current_version() == version_id => context,
        Ok(context) => {
            warn!(
                "Skipping {:?}: resolves to version {:?} instead of {:?}",
                path,
                context.current_version(),
                version_id
            );
            return Ok(false);
        }
        Err(e) => {
            warn!("Skipping {:?}: {}", path, e);
            return Ok(false);
        }
    };

    let stamped = match stamp_page(&html, injector, catalog, &context, config.project_name.as_deref())
    {
        Ok(stamped) => stamped,
        Err(e) => {
            debug!("Skipping {:?}: {}", path, e);
            return Ok(false);
        }
    };

    if stamped != html {
        std::fs::write(path, stamped).map_err(SiteError::io(path))?;
        debug!("Stamped {:?} as {}", path, context.current_version());
    }
    Ok(true)
}

/// HTML files under `dir`, sorted by path
fn html_pages(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| SiteError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let is_html = entry.path().extension().is_some_and(|ext| ext == "html");
        if entry.file_type().is_file() && is_html {
            pages.push(entry.into_path());
        }
    }
    Ok(pages)
}

/// Page path relative to its version directory, `/`-separated
fn relative_page(version_dir: &Path, page_path: &Path) -> Option<String> {
    let relative = page_path.strip_prefix(version_dir).ok()?;
    let segments = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}

use thiserror::Error;

/// Page served when a location names a directory
const DIRECTORY_INDEX: &str = "index.html";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Location {location:?} does not end with page {page:?}")]
    PageMismatch { location: String, page: String },

    #[error("Location {0:?} has no version segment")]
    MissingVersion(String),
}

/// Spell out the page a location names: a location ending in `/` names its `index.html`
pub fn normalize_location(location_path: &str) -> String {
    if location_path.ends_with('/') {
        format!("{location_path}{DIRECTORY_INDEX}")
    } else {
        location_path.to_string()
    }
}

/// Extract the version segment from a page location.
///
/// Strips the trailing `/<page>` from `location_path`; the last remaining
/// segment is the version. A location ending in `/` names its `index.html`.
pub fn resolve_current_version(location_path: &str, page: &str) -> Result<String, PageError> {
    let page = page.trim_start_matches('/');
    let location = normalize_location(location_path);

    let version_root = location
        .strip_suffix(page)
        .and_then(|rest| rest.strip_suffix('/'))
        .ok_or_else(|| PageError::PageMismatch {
            location: location_path.to_string(),
            page: page.to_string(),
        })?;

    let version = match version_root.rfind('/') {
        Some(index) => &version_root[index + 1..],
        None => version_root,
    };

    if version.is_empty() {
        return Err(PageError::MissingVersion(location_path.to_string()));
    }

    Ok(version.to_string())
}

/// Where the reader is: documentation root, page path and viewed version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    root: String,
    page: String,
    current_version: String,
}

impl PageContext {
    pub fn new(
        root: impl Into<String>,
        page: impl Into<String>,
        current_version: impl Into<String>,
    ) -> Self {
        let root: String = root.into();
        let page: String = page.into();
        Self {
            root: root.trim_end_matches('/').to_string(),
            page: page.trim_start_matches('/').to_string(),
            current_version: current_version.into(),
        }
    }

    /// Build the context for a page served at `location_path`
    pub fn from_location(root: &str, page: &str, location_path: &str) -> Result<Self, PageError> {
        let version = resolve_current_version(location_path, page)?;
        Ok(Self::new(root, page, version))
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// `{root}/{version}/{page}`
    pub fn url_for(&self, version_id: &str) -> String {
        format!("{}/{}/{}", self.root, version_id, self.page)
    }

    /// `{root}/{version}/index.html`
    pub fn index_url_for(&self, version_id: &str) -> String {
        format!("{}/{}/{}", self.root, version_id, DIRECTORY_INDEX)
    }

    /// The location of this page under its own version
    pub fn location(&self) -> String {
        self.url_for(&self.current_version)
    }
}

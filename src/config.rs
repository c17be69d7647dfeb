use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Host page constants
// =============================================================================

/// Id of the element the selector is rendered into
pub const DEFAULT_CONTAINER_ID: &str = "version-selector-container";

/// Class of the main content container the banner is placed before
pub const DEFAULT_CONTENT_CLASS: &str = "document";

// =============================================================================
// Catalog constants
// =============================================================================

/// Id of the development version, always listed first
pub const DEFAULT_DEVELOPMENT_ID: &str = "main";

/// Label shown for the development version
pub const DEFAULT_DEVELOPMENT_LABEL: &str = "git-main";

/// File the generated catalog is written to at the site root
pub const CATALOG_FILE_NAME: &str = "versions.json";

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for existence probes in milliseconds (10 seconds)
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    /// Project name used in the outdated banner text
    pub project_name: Option<String>,
    /// Documentation root path every version directory lives under (e.g. "/docs")
    pub url_root: String,
    pub host: HostConfig,
    pub development: DevelopmentConfig,
    pub probe: ProbeConfig,
    /// Template for the root index.html; `{{latest_version}}` is substituted
    pub redirect_template: Option<PathBuf>,
}

impl SelectorConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Elements the host page provides
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HostConfig {
    pub container_id: String,
    pub content_class: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            content_class: DEFAULT_CONTENT_CLASS.to_string(),
        }
    }
}

/// The development entry placed at the front of generated catalogs
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DevelopmentConfig {
    pub id: String,
    pub label: String,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_DEVELOPMENT_ID.to_string(),
            label: DEFAULT_DEVELOPMENT_LABEL.to_string(),
        }
    }
}

/// Existence probe configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProbeConfig {
    pub timeout_ms: u64,
    /// Origin probed URLs are resolved against (e.g. "https://example.github.io")
    pub base_url: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            base_url: None,
        }
    }
}

/// Returns the path to the data directory for version-selector.
/// Uses $XDG_DATA_HOME/version-selector if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-selector,
/// or ./version-selector if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path of the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-selector.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("version-selector")
}

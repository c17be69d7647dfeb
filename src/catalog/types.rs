//! Catalog types shared by rendering, navigation and site stamping

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::error::CatalogError;

/// Label marking the entry that is the newest stable version
pub const LATEST_LABEL: &str = "latest";

/// A documented version: `id` is the URL path segment, `label` is displayed.
///
/// Serialized as a two-element array, e.g. `["0.0.3", "latest"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct VersionEntry {
    pub id: String,
    pub label: String,
}

impl VersionEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Whether this entry is the latest alias
    pub fn is_latest_alias(&self) -> bool {
        self.label == LATEST_LABEL
    }
}

impl From<(String, String)> for VersionEntry {
    fn from((id, label): (String, String)) -> Self {
        Self { id, label }
    }
}

impl From<VersionEntry> for (String, String) {
    fn from(entry: VersionEntry) -> Self {
        (entry.id, entry.label)
    }
}

/// Ordered list of documented versions; order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCatalog {
    entries: Vec<VersionEntry>,
}

impl VersionCatalog {
    pub fn new(entries: Vec<VersionEntry>) -> Self {
        Self { entries }
    }

    /// Build a catalog from `(id, label)` pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(id, label)| VersionEntry::new(*id, *label))
                .collect(),
        )
    }

    /// Parse a catalog from its JSON form
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog file written by the site stamper
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The development alias: always the first entry
    pub fn development(&self) -> Option<&VersionEntry> {
        self.entries.first()
    }

    /// The latest alias: the first entry labelled "latest"
    pub fn latest(&self) -> Option<&VersionEntry> {
        self.entries.iter().find(|entry| entry.is_latest_alias())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Distinct ids in catalog order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !ids.contains(&entry.id.as_str()) {
                ids.push(&entry.id);
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nickel_catalog() -> VersionCatalog {
        VersionCatalog::from_pairs(&[("main", "git-main"), ("0.0.3", "latest"), ("0.0.3", "0.0.3")])
    }

    #[test]
    fn from_json_parses_injected_literal() {
        let catalog =
            VersionCatalog::from_json(r#"[["main", "git-main"], ["0.0.3", "latest"], ["0.0.3", "0.0.3"]]"#)
                .unwrap();

        assert_eq!(catalog, nickel_catalog());
    }

    #[test]
    fn to_json_writes_pairs() {
        assert_eq!(
            nickel_catalog().to_json().unwrap(),
            r#"[["main","git-main"],["0.0.3","latest"],["0.0.3","0.0.3"]]"#
        );
    }

    #[test]
    fn from_json_rejects_entries_that_are_not_pairs() {
        let result = VersionCatalog::from_json(r#"[["main"]]"#);
        assert!(matches!(result, Err(CatalogError::InvalidFormat(_))));
    }

    #[test]
    fn development_is_first_entry_and_latest_is_found_by_label() {
        let catalog = nickel_catalog();

        assert_eq!(catalog.development(), Some(&VersionEntry::new("main", "git-main")));
        assert_eq!(catalog.latest(), Some(&VersionEntry::new("0.0.3", "latest")));
    }

    #[test]
    fn empty_catalog_has_no_aliases() {
        let catalog = VersionCatalog::default();

        assert!(catalog.is_empty());
        assert_eq!(catalog.development(), None);
        assert_eq!(catalog.latest(), None);
    }

    #[test]
    fn ids_are_distinct_and_ordered() {
        assert_eq!(nickel_catalog().ids(), vec!["main", "0.0.3"]);
    }

    #[test]
    fn contains_matches_ids_not_labels() {
        let catalog = nickel_catalog();

        assert!(catalog.contains("0.0.3"));
        assert!(!catalog.contains("latest"));
    }
}

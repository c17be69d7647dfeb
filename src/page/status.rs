//! Staleness of the viewed documentation version

use crate::catalog::VersionCatalog;

/// Status of the version being viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// Viewed version is the latest alias
    Latest,
    /// Viewed version is the development alias (first catalog entry)
    Development,
    /// Viewed version is older than the latest alias
    Outdated,
    /// Catalog has no latest alias to compare against
    Untracked,
}

impl VersionStatus {
    /// Whether the outdated banner should be shown
    pub fn is_outdated(self) -> bool {
        self == VersionStatus::Outdated
    }
}

/// Classify `current_version` against the catalog's aliases
pub fn classify(catalog: &VersionCatalog, current_version: &str) -> VersionStatus {
    let Some(latest) = catalog.latest() else {
        return VersionStatus::Untracked;
    };

    if latest.id == current_version {
        return VersionStatus::Latest;
    }

    match catalog.development() {
        Some(development) if development.id == current_version => VersionStatus::Development,
        _ => VersionStatus::Outdated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn nickel_catalog() -> VersionCatalog {
        VersionCatalog::from_pairs(&[("main", "git-main"), ("0.0.3", "latest"), ("0.0.3", "0.0.3")])
    }

    #[rstest]
    #[case("main", VersionStatus::Development)]
    #[case("0.0.3", VersionStatus::Latest)]
    #[case("0.0.2", VersionStatus::Outdated)]
    #[case("0.0.1-unknown", VersionStatus::Outdated)] // not in catalog
    fn test_classify(#[case] current: &str, #[case] expected: VersionStatus) {
        assert_eq!(classify(&nickel_catalog(), current), expected);
    }

    #[test]
    fn classify_without_latest_alias_is_untracked() {
        let catalog = VersionCatalog::from_pairs(&[("main", "git-main")]);
        assert_eq!(classify(&catalog, "0.0.1"), VersionStatus::Untracked);
    }

    #[test]
    fn only_outdated_shows_banner() {
        assert!(VersionStatus::Outdated.is_outdated());
        assert!(!VersionStatus::Latest.is_outdated());
        assert!(!VersionStatus::Development.is_outdated());
        assert!(!VersionStatus::Untracked.is_outdated());
    }
}

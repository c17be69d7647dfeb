//! Published site fixtures

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Host page following the contract the stamper expects
pub fn host_page(root: &str, page: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body data-documentation-root="{root}" data-documentation-current-page="{page}">
<div class="related"><span id="version-selector-container"></span></div>
<div class="document"><h1>{page}</h1></div>
</body>
</html>
"#
    )
}

/// A temporary site root with one directory per published version
pub struct PublishedSite {
    dir: TempDir,
    root: String,
}

impl PublishedSite {
    pub fn new(root: &str) -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            root: root.to_string(),
        }
    }

    /// Add a host page under `version`
    pub fn with_page(self, version: &str, page: &str) -> Self {
        let html = host_page(&self.root, page);
        self.with_file(version, page, &html)
    }

    /// Add a file with arbitrary content under `version`
    pub fn with_file(self, version: &str, page: &str, content: &str) -> Self {
        let path = self.dir.path().join(version).join(page);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn page_path(&self, version: &str, page: &str) -> PathBuf {
        self.dir.path().join(version).join(page)
    }

    pub fn read(&self, version: &str, page: &str) -> String {
        std::fs::read_to_string(self.page_path(version, page)).unwrap()
    }
}

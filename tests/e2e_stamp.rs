//! Stamping a published site end to end

mod helper;

use helper::PublishedSite;
use version_selector::catalog::VersionCatalog;
use version_selector::config::{CATALOG_FILE_NAME, SelectorConfig};
use version_selector::site::stamp_site;

fn config() -> SelectorConfig {
    SelectorConfig {
        project_name: Some("Nickel".to_string()),
        url_root: "/docs".to_string(),
        ..SelectorConfig::default()
    }
}

fn nickel_site() -> PublishedSite {
    PublishedSite::new("/docs")
        .with_page("main", "index.html")
        .with_page("0.0.3", "index.html")
        .with_page("0.0.3", "guide/index.html")
        .with_page("0.0.2", "index.html")
        .with_page("0.0.2", "guide/index.html")
}

#[test]
fn stamps_every_version_and_writes_catalog() {
    let site = nickel_site();

    let report = stamp_site(site.path(), &config()).unwrap();

    assert_eq!(report.versions, 3);
    assert_eq!(report.pages_stamped, 5);
    assert_eq!(report.pages_skipped, 0);
    assert!(report.redirect_written);

    let catalog = VersionCatalog::load(&site.path().join(CATALOG_FILE_NAME)).unwrap();
    assert_eq!(
        catalog,
        VersionCatalog::from_pairs(&[
            ("main", "git-main"),
            ("0.0.3", "latest"),
            ("0.0.3", "0.0.3"),
            ("0.0.2", "0.0.2"),
        ])
    );
    assert_eq!(report.catalog, catalog);
}

#[test]
fn outdated_pages_get_banner_linking_to_latest() {
    let site = nickel_site();

    stamp_site(site.path(), &config()).unwrap();

    let page = site.read("0.0.2", "guide/index.html");
    assert!(page.contains(r#"<option value="0.0.2" selected>0.0.2</option>"#));
    assert!(page.contains("This is documentation for an older version of Nickel."));
    assert!(page.contains("<a href='/docs/0.0.3/guide/index.html'>"));
}

#[test]
fn latest_and_development_pages_have_no_banner() {
    let site = nickel_site();

    stamp_site(site.path(), &config()).unwrap();

    let latest = site.read("0.0.3", "guide/index.html");
    assert!(latest.contains(r#"<option value="0.0.3" selected>latest</option>"#));
    assert!(!latest.contains("outdated-banner"));

    let development = site.read("main", "index.html");
    assert!(development.contains(r#"<option value="main" selected>git-main</option>"#));
    assert!(!development.contains("outdated-banner"));
}

#[test]
fn stamping_twice_yields_identical_pages() {
    let site = nickel_site();

    stamp_site(site.path(), &config()).unwrap();
    let first = site.read("0.0.2", "guide/index.html");
    stamp_site(site.path(), &config()).unwrap();
    let second = site.read("0.0.2", "guide/index.html");

    assert_eq!(first, second);
    assert_eq!(second.matches("outdated-banner").count(), 1);
}

#[test]
fn newly_published_version_moves_banner_to_previous_latest() {
    let site = nickel_site();
    stamp_site(site.path(), &config()).unwrap();
    assert!(!site.read("0.0.3", "index.html").contains("outdated-banner"));

    let site = site.with_page("0.0.4", "index.html");
    stamp_site(site.path(), &config()).unwrap();

    assert!(site.read("0.0.3", "index.html").contains("<a href='/docs/0.0.4/index.html'>"));
    assert!(!site.read("0.0.4", "index.html").contains("outdated-banner"));
}

#[test]
fn pages_without_container_are_skipped_untouched() {
    let site = nickel_site().with_file("0.0.2", "search.html", "<html><body>search</body></html>");

    let report = stamp_site(site.path(), &config()).unwrap();

    assert_eq!(report.pages_skipped, 1);
    assert_eq!(site.read("0.0.2", "search.html"), "<html><body>search</body></html>");
}

#[test]
fn pages_declaring_a_different_page_are_skipped_untouched() {
    let misplaced = helper::host_page("/docs", "index.html");
    let site = nickel_site().with_file("0.0.3", "guide/index.html", &misplaced);

    let report = stamp_site(site.path(), &config()).unwrap();

    assert_eq!(report.pages_skipped, 1);
    assert_eq!(report.pages_stamped, 4);
    let page = site.read("0.0.3", "guide/index.html");
    assert_eq!(page, misplaced);
    assert!(!page.contains("outdated-banner"));
}

#[test]
fn root_index_redirects_to_latest() {
    let site = nickel_site();

    stamp_site(site.path(), &config()).unwrap();

    let index = std::fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(index.contains(r#"content="0; url=0.0.3/index.html""#));
}

#[test]
fn site_with_only_development_version_writes_no_redirect() {
    let site = PublishedSite::new("/docs").with_page("main", "index.html");

    let report = stamp_site(site.path(), &config()).unwrap();

    assert!(!report.redirect_written);
    assert!(!site.path().join("index.html").exists());
    assert!(!site.read("main", "index.html").contains("outdated-banner"));
}

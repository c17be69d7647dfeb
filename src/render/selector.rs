//! Version drop-down markup

use crate::catalog::{VersionCatalog, VersionEntry};
use crate::render::escape::escape_html;

/// Id of the rendered `<select>` element
pub const SELECTOR_ID: &str = "version-selector";

/// Whether `entry` matches the viewed version.
///
/// An entry matches when its id is the current version and the current
/// version is not the latest alias id, or when the current version is the
/// latest alias id and the entry is the "latest" labelled one.
pub fn is_selected(entry: &VersionEntry, current_version: &str, latest_id: Option<&str>) -> bool {
    let viewing_latest = latest_id == Some(current_version);
    if viewing_latest {
        entry.is_latest_alias()
    } else {
        entry.id == current_version
    }
}

/// Render the `<select>` drop-down for `catalog`.
///
/// One `<option>` per entry in catalog order; at most one is marked
/// `selected` (the first match).
pub fn render_selector(catalog: &VersionCatalog, current_version: &str) -> String {
    let latest_id = catalog.latest().map(|entry| entry.id.as_str());
    let selected = catalog
        .entries()
        .iter()
        .position(|entry| is_selected(entry, current_version, latest_id));

    let mut generated = format!(r#"<select id="{SELECTOR_ID}">"#);

    for (index, entry) in catalog.entries().iter().enumerate() {
        let value = escape_html(&entry.id);
        let display = escape_html(&entry.label);
        if selected == Some(index) {
            generated.push_str(&format!(r#"<option value="{value}" selected>{display}</option>"#));
        } else {
            generated.push_str(&format!(r#"<option value="{value}">{display}</option>"#));
        }
    }

    generated.push_str("</select>");
    generated
}

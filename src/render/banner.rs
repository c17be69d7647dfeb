//! Outdated-version banner markup

use crate::catalog::VersionCatalog;
use crate::page::{PageContext, classify};
use crate::render::escape::escape_html;

/// Id of the banner element, used to find a previously inserted banner
pub const BANNER_ID: &str = "outdated-banner";

const BANNER_STYLE: &str = "background-color: khaki; text-align: center; padding: 5px; max-width: none";

/// Build the outdated banner for the viewed page.
///
/// Returns `None` when the page is the latest or development version, or
/// when the catalog has no latest alias. The banner links to the same page
/// under the latest version.
pub fn outdated_banner(
    catalog: &VersionCatalog,
    context: &PageContext,
    project_name: Option<&str>,
) -> Option<String> {
    if !classify(catalog, context.current_version()).is_outdated() {
        return None;
    }
    let latest = catalog.latest()?;

    let redirect_url = escape_html(&context.url_for(&latest.id));
    let subject = match project_name {
        Some(name) => format!("an older version of {}", escape_html(name)),
        None => "an older version".to_string(),
    };

    Some(format!(
        "<div class='body' id='{BANNER_ID}' style='{BANNER_STYLE}'>\
         This is documentation for {subject}. \
         <a href='{redirect_url}'>Click here to go to the latest version.</a>\
         </div>"
    ))
}

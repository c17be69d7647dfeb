//! Root page redirecting readers to the latest version

use std::path::Path;

use crate::site::error::SiteError;

/// Placeholder substituted with the latest version id
pub const LATEST_VERSION_PLACEHOLDER: &str = "{{latest_version}}";

/// Template used when no redirect template is configured
pub const DEFAULT_REDIRECT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta http-equiv="refresh" content="0; url={{latest_version}}/index.html">
    <link rel="canonical" href="{{latest_version}}/index.html">
  </head>
  <body>
    <a href="{{latest_version}}/index.html">Go to the latest documentation.</a>
  </body>
</html>
"#;

/// Substitute the latest version into a redirect template
pub fn render_redirect(template: &str, latest_id: &str) -> String {
    template.replace(LATEST_VERSION_PLACEHOLDER, latest_id)
}

/// Load a redirect template, or the default when none is given
pub fn load_template(path: Option<&Path>) -> Result<String, SiteError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(SiteError::io(path)),
        None => Ok(DEFAULT_REDIRECT_TEMPLATE.to_string()),
    }
}

//! Placing selector and banner markup into a host HTML page
//!
//! The host page contract:
//! - `<body data-documentation-root="..." data-documentation-current-page="...">`
//! - an element with the container id, which receives the selector
//! - a `div` with the content class, which the banner is placed before

use regex::Regex;
use thiserror::Error;

use crate::config::HostConfig;
use crate::render::banner::BANNER_ID;

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("Host page has no element with id {0:?}")]
    MissingContainer(String),

    #[error("Element with id {0:?} is never closed")]
    UnclosedContainer(String),

    #[error("Host page has no div with class {0:?}")]
    MissingContent(String),

    #[error("Invalid host element pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Data attributes the host page declares on its `<body>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPage {
    pub root: String,
    pub page: String,
}

/// Edits host pages according to a [`HostConfig`]
pub struct PageInjector {
    container_id: String,
    content_class: String,
    /// Opening tag of the selector container; group 1 is the tag name
    container_open_re: Regex,
    /// Opening tag of any `div`
    div_open_re: Regex,
    /// `class="..."`; group 1 is the class list
    class_attr_re: Regex,
    /// A previously inserted banner
    banner_re: Regex,
    /// Opening `<body>` tag; group 1 is its attributes
    body_re: Regex,
    /// `data-documentation-*` attribute; group 1 is the name, group 2 or 3 the value
    data_attr_re: Regex,
}

impl PageInjector {
    pub fn new(host: &HostConfig) -> Result<Self, InjectError> {
        let container_id = regex::escape(&host.container_id);
        Ok(Self {
            container_id: host.container_id.clone(),
            content_class: host.content_class.clone(),
            container_open_re: Regex::new(&format!(
                r#"<([A-Za-z][A-Za-z0-9]*)\b[^>]*\sid\s*=\s*["']{container_id}["'][^>]*>"#
            ))?,
            div_open_re: Regex::new(r"<div\b[^>]*>")?,
            class_attr_re: Regex::new(r#"\bclass\s*=\s*["']([^"']*)["']"#)?,
            banner_re: Regex::new(&format!(
                r#"(?s)<div\b[^>]*\sid\s*=\s*["']{BANNER_ID}["'][^>]*>.*?</div>"#
            ))?,
            body_re: Regex::new(r"<body\b([^>]*)>")?,
            data_attr_re: Regex::new(
                r#"\bdata-documentation-(root|current-page)\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
            )?,
        })
    }

    /// Read the documentation root and current page from the `<body>` tag.
    ///
    /// Returns `None` unless both attributes are present.
    pub fn read_host_attributes(&self, html: &str) -> Option<HostPage> {
        let attributes = self.body_re.captures(html)?.get(1)?.as_str();

        let mut root = None;
        let mut page = None;
        for captures in self.data_attr_re.captures_iter(attributes) {
            let value = captures
                .get(2)
                .or_else(|| captures.get(3))
                .map(|m| m.as_str().to_string());
            match &captures[1] {
                "root" => root = value,
                _ => page = value,
            }
        }

        Some(HostPage {
            root: root?,
            page: page?,
        })
    }

    /// Replace the content of the selector container with `selector`
    pub fn inject_selector(&self, html: &str, selector: &str) -> Result<String, InjectError> {
        let captures = self
            .container_open_re
            .captures(html)
            .ok_or_else(|| InjectError::MissingContainer(self.container_id.clone()))?;
        let (Some(open), Some(tag)) = (captures.get(0), captures.get(1)) else {
            return Err(InjectError::MissingContainer(self.container_id.clone()));
        };

        let close_start = matching_close(html, tag.as_str(), open.end())?
            .ok_or_else(|| InjectError::UnclosedContainer(self.container_id.clone()))?;

        let mut result = String::with_capacity(html.len() + selector.len());
        result.push_str(&html[..open.end()]);
        result.push_str(selector);
        result.push_str(&html[close_start..]);
        Ok(result)
    }

    /// Remove any existing banner and, when `banner` is given, insert it
    /// immediately before the content container
    pub fn insert_banner(&self, html: &str, banner: Option<&str>) -> Result<String, InjectError> {
        let cleaned = self.banner_re.replace_all(html, "");

        let Some(banner) = banner else {
            return Ok(cleaned.into_owned());
        };

        let content_start = self
            .find_content_div(&cleaned)
            .ok_or_else(|| InjectError::MissingContent(self.content_class.clone()))?;

        let mut result = String::with_capacity(cleaned.len() + banner.len());
        result.push_str(&cleaned[..content_start]);
        result.push_str(banner);
        result.push_str(&cleaned[content_start..]);
        Ok(result)
    }

    /// Byte offset of the first `div` whose class list contains the content class
    fn find_content_div(&self, html: &str) -> Option<usize> {
        self.div_open_re
            .find_iter(html)
            .find(|tag| {
                self.class_attr_re
                    .captures(tag.as_str())
                    .and_then(|captures| captures.get(1))
                    .is_some_and(|classes| {
                        classes
                            .as_str()
                            .split_whitespace()
                            .any(|class| class == self.content_class)
                    })
            })
            .map(|tag| tag.start())
    }
}

/// Byte offset of the `</tag>` closing an element whose content starts at `from`.
///
/// Nested elements with the same tag name are skipped over.
fn matching_close(html: &str, tag: &str, from: usize) -> Result<Option<usize>, regex::Error> {
    let tag_re = Regex::new(&format!(r"(?i)<(/?){}(?:[\s/][^>]*)?>", regex::escape(tag)))?;

    let mut depth = 1usize;
    for captures in tag_re.captures_iter(&html[from..]) {
        let Some(found) = captures.get(0) else {
            continue;
        };
        let is_closing = captures.get(1).is_some_and(|slash| !slash.is_empty());
        if is_closing {
            depth -= 1;
            if depth == 0 {
                return Ok(Some(from + found.start()));
            }
        } else if !found.as_str().ends_with("/>") {
            depth += 1;
        }
    }
    Ok(None)
}

//! Version picker for multi-version documentation sites
//!
//! # Modules
//!
//! - [`catalog`]: Known documentation versions and how they are ordered
//! - [`page`]: Per-page context and current version resolution
//! - [`render`]: Selector and outdated banner markup, host page injection
//! - [`navigate`]: Selection handling with an existence probe
//! - [`site`]: Stamping a published documentation tree
//! - [`config`]: Configuration file and defaults
//! - [`logging`]: Tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod logging;
pub mod navigate;
pub mod page;
pub mod render;
pub mod site;

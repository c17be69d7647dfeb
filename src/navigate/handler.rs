//! Reacting to a version being picked in the selector

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::navigate::probe::ExistenceProbe;
use crate::page::{PageContext, normalize_location};

/// Where the browser should go after a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Stay on the current page
    Stay,
    /// Go to `url`; `fallback` is set when the page was missing under the
    /// selected version and its index page is used instead
    Redirect { url: String, fallback: bool },
}

/// Lifecycle of the handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerState {
    /// Displaying the current page
    Idle,
    /// A redirect to the given URL has been issued
    Navigating(String),
}

/// Turns selection changes into navigation targets.
///
/// The target page is probed before redirecting; when it is missing the
/// selected version's index page is used instead.
pub struct NavigationHandler {
    probe: Arc<dyn ExistenceProbe>,
    context: PageContext,
    state: HandlerState,
}

impl NavigationHandler {
    pub fn new(probe: Arc<dyn ExistenceProbe>, context: PageContext) -> Self {
        Self {
            probe,
            context,
            state: HandlerState::Idle,
        }
    }

    pub fn state(&self) -> &HandlerState {
        &self.state
    }

    /// Handle the selector changing to `selected_id` while the browser is at
    /// `current_location`.
    ///
    /// Once a redirect has been issued, further changes are ignored.
    pub async fn on_change(&mut self, selected_id: &str, current_location: &str) -> Navigation {
        if let HandlerState::Navigating(url) = &self.state {
            debug!("Ignoring selection of {}: already navigating to {}", selected_id, url);
            return Navigation::Stay;
        }

        let target = self.context.url_for(selected_id);
        if target == normalize_location(current_location) {
            debug!("Selection of {} keeps the current page", selected_id);
            return Navigation::Stay;
        }

        let navigation = match self.probe.exists(&target).await {
            Ok(true) => Navigation::Redirect {
                url: target,
                fallback: false,
            },
            Ok(false) => {
                info!("{} does not exist, falling back to version index", target);
                self.fallback(selected_id)
            }
            Err(e) => {
                warn!("Failed to probe {}: {}", target, e);
                self.fallback(selected_id)
            }
        };

        if let Navigation::Redirect { url, .. } = &navigation {
            self.state = HandlerState::Navigating(url.clone());
        }
        navigation
    }

    fn fallback(&self, selected_id: &str) -> Navigation {
        Navigation::Redirect {
            url: self.context.index_url_for(selected_id),
            fallback: true,
        }
    }
}

use std::sync::Arc;

use crate::services::SessionCoordinator;
use crate::views::Views;

/// Application state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    coordinator: SessionCoordinator,
    views: Arc<Views>,
    /// Base for share links, without a trailing slash.
    public_url: Option<String>,
}

impl AppState {
    pub fn new(coordinator: SessionCoordinator, views: Arc<Views>, public_url: Option<String>) -> Self {
        Self {
            coordinator,
            views,
            public_url,
        }
    }

    pub fn coordinator(&self) -> &SessionCoordinator {
        &self.coordinator
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }
}

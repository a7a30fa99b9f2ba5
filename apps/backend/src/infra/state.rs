use std::sync::Arc;

use crate::error::AppError;
use crate::services::{SessionCoordinator, SessionStore};
use crate::state::app_state::AppState;
use crate::views::Views;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    store: Option<Arc<SessionStore>>,
    public_url: Option<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            public_url: None,
        }
    }

    /// Share an existing store instead of starting empty.
    pub fn with_store(mut self, store: Arc<SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_public_url(mut self, public_url: Option<String>) -> Self {
        self.public_url = public_url;
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let store = self.store.unwrap_or_default();
        let views = Arc::new(Views::new()?);
        Ok(AppState::new(
            SessionCoordinator::new(store),
            views,
            self.public_url,
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

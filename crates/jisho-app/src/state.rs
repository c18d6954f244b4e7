use std::sync::Arc;

use jisho_core::SearchCoordinator;

/// Shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<SearchCoordinator>,
}

impl AppState {
    pub fn new(coordinator: SearchCoordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
        }
    }
}

//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::id::IdService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub id_service: Arc<IdService>,
}

impl AppState {
    pub fn new(id_service: IdService) -> Self {
        Self {
            id_service: Arc::new(id_service),
        }
    }
}

//! Shared server state

use borderpass_application::AssistUseCase;
use borderpass_domain::Catalog;
use std::sync::Arc;

/// State shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub assist: Arc<AssistUseCase>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(assist: AssistUseCase, catalog: Catalog) -> Self {
        Self {
            assist: Arc::new(assist),
            catalog: Arc::new(catalog),
        }
    }
}

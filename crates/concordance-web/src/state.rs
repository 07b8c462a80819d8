use std::sync::Arc;

use concordance_core::QueryService;

/// Application state shared across all requests. The query service is
/// stateless per request; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QueryService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: QueryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

use std::sync::Arc;

use crate::services::{CandidatePool, MovieProvider};

/// Shared application state
///
/// Read-only after startup: the provider is stateless and the pool is fixed.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MovieProvider>,
    pub pool: Arc<CandidatePool>,
}

impl AppState {
    pub fn new(provider: Arc<dyn MovieProvider>, pool: CandidatePool) -> Self {
        Self {
            provider,
            pool: Arc::new(pool),
        }
    }
}

//! Application state

use std::sync::Arc;

use vigil_engine::AlertEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AlertEngine>,
}

impl AppState {
    pub fn new(engine: AlertEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

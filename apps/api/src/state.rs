use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::generation::generator::ContentService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Single writer for the example store: every generation holds this lock for
    /// its whole read-modify-write cycle, so concurrent requests cannot lose appends.
    pub service: Arc<Mutex<ContentService>>,
    pub config: Config,
}

impl AppState {
    pub fn new(service: ContentService, config: Config) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
            config,
        }
    }
}

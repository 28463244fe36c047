//! Shared application state for Axum routers.

use std::sync::Arc;

use vital_storage::EventStore;

use crate::config::ApiConfig;

/// Type alias for the store implementation shared across routes.
///
/// The API is written against the `EventStore` trait, so swapping the
/// in-memory store for a persistent backend touches only startup code.
pub type SharedStore = Arc<dyn EventStore>;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<ApiConfig>,
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state around a store and configuration.
    pub fn new(store: SharedStore, config: ApiConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            start_time: std::time::Instant::now(),
        }
    }
}

//! Shared application state injected into all Axum handlers.

use crate::stats::StatsService;
use crate::store::PostgresStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store for all entity reads and writes.
    pub store: PostgresStore,
    /// Read-only statistics over the grant history.
    pub stats: StatsService,
}

impl AppState {
    /// Builds the application state around a store handle.
    #[must_use]
    pub fn new(store: PostgresStore) -> Self {
        let stats = StatsService::new(store.clone());
        Self { store, stats }
    }
}

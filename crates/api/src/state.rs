use std::sync::Arc;

use recordshop_catalog::{CatalogService, PgRecordStore};
use recordshop_core::clock::{Clock, SystemClock};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: recordshop_db::DbPool,
    /// Server configuration (read by the auth extractor and handlers).
    pub config: Arc<ServerConfig>,
    /// Record catalog operations over the same pool.
    pub catalog: CatalogService<PgRecordStore>,
}

impl AppState {
    /// State backed by the system wall clock.
    pub fn new(pool: recordshop_db::DbPool, config: ServerConfig) -> Self {
        Self::with_clock(pool, config, Arc::new(SystemClock))
    }

    /// State whose release-year validation reads `clock`.
    pub fn with_clock(
        pool: recordshop_db::DbPool,
        config: ServerConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let catalog = CatalogService::new(PgRecordStore::new(pool.clone()), clock);
        Self {
            pool,
            config: Arc::new(config),
            catalog,
        }
    }
}

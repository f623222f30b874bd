use std::sync::Arc;

use cinelog_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

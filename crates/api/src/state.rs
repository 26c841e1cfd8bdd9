use std::sync::Arc;

use crate::config::ServerConfig;
use crate::fetch::FileFetcher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Both the pool and the fetcher are built once at process start and reused
/// across requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: handover_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Remote file fetcher used by the archive export. A trait object so
    /// tests can substitute a stub.
    pub fetcher: Arc<dyn FileFetcher>,
}

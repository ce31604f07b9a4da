use std::sync::Arc;

use makerslab_db::store::ContentStore;
use makerslab_storage::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Content Store (PostgreSQL in production).
    pub store: Arc<dyn ContentStore>,
    /// Backend receiving new uploads; serves `/objects/...`.
    pub uploads: Arc<dyn BlobStore>,
    /// Local upload directory; serves `/uploads/...` references.
    pub local_uploads: Arc<dyn BlobStore>,
    pub config: Arc<ServerConfig>,
}

use std::sync::Arc;

use campusfest_core::catalog::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: both fields are behind `Arc`. The catalog is never
/// mutated after startup, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    /// Read-only seed dataset.
    pub catalog: Arc<Catalog>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

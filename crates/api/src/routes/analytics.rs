use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Mounted at `/analytics`.
///
/// ```text
/// GET    /stats         -> get_stats
/// GET    /categories    -> get_category_breakdown
/// GET    /top-events    -> get_top_events (?limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(analytics::get_stats))
        .route("/categories", get(analytics::get_category_breakdown))
        .route("/top-events", get(analytics::get_top_events))
}

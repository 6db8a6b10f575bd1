pub mod analytics;
pub mod certificates;
pub mod events;
pub mod health;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /certificates                                    list, lookup, verify
/// /events                                          browse, admin edits, registration
/// /students                                        current student, dashboard views
/// /analytics                                       admin dashboard aggregates
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/certificates", certificates::router())
        .nest("/events", events::router())
        .nest("/students", students::router())
        .nest("/analytics", analytics::router())
}

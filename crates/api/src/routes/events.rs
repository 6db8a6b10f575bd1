//! Route definitions for events.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Mounted at `/events`.
///
/// ```text
/// GET    /                 -> list_events (?category=&q=&sort=)
/// POST   /                 -> create_event
/// GET    /featured         -> list_featured
/// GET    /{id}             -> get_event
/// PUT    /{id}             -> update_event
/// DELETE /{id}             -> delete_event
/// POST   /{id}/register    -> register_for_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/featured", get(events::list_featured))
        .route(
            "/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/{id}/register", post(events::register_for_event))
}

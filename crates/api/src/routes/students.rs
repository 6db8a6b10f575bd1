use axum::routing::{get, put};
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Mounted at `/students`.
///
/// ```text
/// GET    /current              -> get_current_student
/// GET    /{id}/events          -> get_student_events
/// GET    /{id}/achievements    -> get_student_achievements
/// PUT    /{id}/profile         -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", get(students::get_current_student))
        .route("/{id}/events", get(students::get_student_events))
        .route("/{id}/achievements", get(students::get_student_achievements))
        .route("/{id}/profile", put(students::update_profile))
}

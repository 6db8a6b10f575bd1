//! Route definitions for certificate lookup and verification.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::certificates;
use crate::state::AppState;

/// Mounted at `/certificates`.
///
/// ```text
/// GET    /            -> list_certificates (?student_id= | ?login_id= | ?roll_number=)
/// POST   /verify      -> verify_certificate
/// GET    /{id}        -> get_certificate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(certificates::list_certificates))
        .route("/verify", post(certificates::verify_certificate))
        .route("/{id}", get(certificates::get_certificate))
}

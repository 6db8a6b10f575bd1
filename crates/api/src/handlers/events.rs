//! Handlers for event browsing and the admin event endpoints.
//!
//! The admin create/update/delete and registration endpoints validate their
//! input and acknowledge it, but the seed catalog is never modified.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use campusfest_core::error::CoreError;
use campusfest_core::event::{self, Event, EventDraft, EventFilter};
use campusfest_core::student;
use campusfest_core::types::{EventId, StudentId};

use crate::error::{AppError, AppResult};
use crate::query::EventListParams;
use crate::response::{Ack, DataResponse};
use crate::state::AppState;

pub const MSG_REGISTERED: &str = "Successfully registered for event!";
pub const MSG_CREATED: &str = "Event created successfully!";
pub const MSG_UPDATED: &str = "Event updated successfully!";
pub const MSG_DELETED: &str = "Event deleted successfully!";

/// Body for `POST /events/{id}/register`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub student_id: StudentId,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ensure_event_exists(events: &[Event], id: EventId) -> AppResult<&Event> {
    event::find_event(events, id).ok_or_else(|| AppError::Core(CoreError::not_found("Event", id)))
}

// ---------------------------------------------------------------------------
// Browsing
// ---------------------------------------------------------------------------

/// GET /events?category=&q=&sort=
pub async fn list_events(
    State(state): State<AppState>,
    params: Result<Query<EventListParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let filter = EventFilter {
        category: event::parse_category_filter(params.category.as_deref().unwrap_or(""))?,
        query: params.q,
        sort: params.sort,
    };

    let items = event::browse(&state.catalog.events, &filter);
    tracing::debug!(count = items.len(), "Listed events");
    Ok(Json(DataResponse { data: items }).into_response())
}

/// GET /events/featured
pub async fn list_featured(State(state): State<AppState>) -> Response {
    Json(DataResponse {
        data: event::featured(&state.catalog.events),
    })
    .into_response()
}

/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> AppResult<Response> {
    let found = ensure_event_exists(&state.catalog.events, id)?;
    Ok(Json(DataResponse { data: found }).into_response())
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// POST /events
pub async fn create_event(
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(draft) = payload?;
    event::validate_event_draft(&draft)?;

    tracing::info!(title = %draft.title, category = %draft.category, "Event create accepted");
    Ok((StatusCode::CREATED, Json(Ack::ok(MSG_CREATED))))
}

/// PUT /events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state.catalog.events, id)?;
    let Json(draft) = payload?;
    event::validate_event_draft(&draft)?;

    tracing::info!(event_id = id, title = %draft.title, "Event update accepted");
    Ok(Json(Ack::ok(MSG_UPDATED)))
}

/// DELETE /events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state.catalog.events, id)?;

    tracing::info!(event_id = id, "Event delete accepted");
    Ok(Json(Ack::ok(MSG_DELETED)))
}

/// POST /events/{id}/register
pub async fn register_for_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state.catalog.events, id)?;
    let Json(request) = payload?;
    student::find_student(&state.catalog.students, request.student_id)
        .ok_or_else(|| CoreError::not_found("Student", request.student_id))?;

    tracing::info!(event_id = id, student_id = request.student_id, "Event registration accepted");
    Ok(Json(Ack::ok(MSG_REGISTERED)))
}

//! Handlers for the admin dashboard aggregates.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use campusfest_core::analytics;

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_TOP_EVENTS: usize = 5;
const MAX_TOP_EVENTS: usize = 50;

/// GET /analytics/stats
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let stats = analytics::platform_stats(&state.catalog.events, &state.catalog.students);
    Json(DataResponse { data: stats })
}

/// GET /analytics/categories
pub async fn get_category_breakdown(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: analytics::category_breakdown(&state.catalog.events),
    })
}

/// GET /analytics/top-events?limit=
pub async fn get_top_events(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let limit = params
        .limit
        .unwrap_or(DEFAULT_TOP_EVENTS)
        .clamp(1, MAX_TOP_EVENTS);
    Ok(Json(DataResponse {
        data: analytics::top_events_by_registrations(&state.catalog.events, limit),
    })
    .into_response())
}

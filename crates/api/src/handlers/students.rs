//! Handlers for the student directory and dashboard views.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use campusfest_core::certificate::{self, AchievementStats};
use campusfest_core::error::CoreError;
use campusfest_core::event::{self, Event};
use campusfest_core::student::{self, ProfileUpdate, Student};
use campusfest_core::types::StudentId;

use crate::error::{AppError, AppResult};
use crate::response::{Ack, DataResponse};
use crate::state::AppState;

pub const MSG_PROFILE_UPDATED: &str = "Profile updated successfully!";

/// A student's registrations split around today's date.
#[derive(Debug, Serialize)]
pub struct StudentEvents<'a> {
    pub registered: Vec<&'a Event>,
    pub upcoming: Vec<&'a Event>,
    pub past: Vec<&'a Event>,
}

/// Achievement summary for the student dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAchievements<'a> {
    pub student_id: StudentId,
    pub stats: AchievementStats,
    pub certificates: Vec<&'a certificate::CertificateRecord>,
}

fn ensure_student_exists(students: &[Student], id: StudentId) -> AppResult<&Student> {
    student::find_student(students, id).ok_or_else(|| AppError::Core(CoreError::not_found("Student", id)))
}

/// GET /students/current
pub async fn get_current_student(State(state): State<AppState>) -> AppResult<Response> {
    let current = ensure_student_exists(&state.catalog.students, state.config.current_student_id)?;
    Ok(Json(DataResponse { data: current }).into_response())
}

/// GET /students/{id}/events
pub async fn get_student_events(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> AppResult<Response> {
    let found = ensure_student_exists(&state.catalog.students, id)?;
    let registered = student::registered_events(&state.catalog.events, found);

    let today = chrono::Utc::now().date_naive();
    let (upcoming, past) = event::split_by_date(registered.iter().copied(), today);

    Ok(Json(DataResponse {
        data: StudentEvents {
            registered,
            upcoming,
            past,
        },
    })
    .into_response())
}

/// GET /students/{id}/achievements
pub async fn get_student_achievements(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> AppResult<Response> {
    ensure_student_exists(&state.catalog.students, id)?;
    let certificates = certificate::find_by_student_id(&state.catalog.certificates, id);
    let stats = certificate::aggregate_stats(certificates.iter().copied());

    Ok(Json(DataResponse {
        data: StudentAchievements {
            student_id: id,
            stats,
            certificates,
        },
    })
    .into_response())
}

/// PUT /students/{id}/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    ensure_student_exists(&state.catalog.students, id)?;
    let Json(update) = payload?;
    student::validate_profile_update(&update)?;

    tracing::info!(student_id = id, "Profile update accepted");
    Ok(Json(Ack::ok(MSG_PROFILE_UPDATED)))
}

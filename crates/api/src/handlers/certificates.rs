//! Handlers for certificate lookup and verification.
//!
//! Certificates are read-only; every endpoint here is a query over the seed
//! catalog held in [`AppState`].

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use campusfest_core::certificate::{self, CertificateRecord};
use campusfest_core::error::CoreError;
use campusfest_core::verification::{self, SearchQuery};

use crate::error::{AppError, AppResult};
use crate::query::CertificateFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /certificates/verify
// ---------------------------------------------------------------------------

/// Score the submitted details against every certificate.
///
/// No match and multiple matches are both ordinary `200` responses; the
/// `valid` flag and `message` tell them apart.
pub async fn verify_certificate(
    State(state): State<AppState>,
    payload: Result<Json<SearchQuery>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(query) = payload?;
    let result = verification::verify(&query, &state.catalog.certificates);

    tracing::info!(
        valid = result.valid,
        matched = result.certificates.len(),
        "Certificate verification requested"
    );
    Ok(Json(DataResponse { data: result }))
}

// ---------------------------------------------------------------------------
// GET /certificates
// ---------------------------------------------------------------------------

/// List certificates, optionally narrowed by exactly one identity filter.
pub async fn list_certificates(
    State(state): State<AppState>,
    params: Result<Query<CertificateFilterParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let catalog = &state.catalog.certificates;

    let filters_set = [
        params.student_id.is_some(),
        params.login_id.is_some(),
        params.roll_number.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count();

    if filters_set > 1 {
        return Err(AppError::BadRequest(
            "Specify at most one of student_id, login_id, roll_number".to_string(),
        ));
    }

    let items: Vec<&CertificateRecord> = if let Some(student_id) = params.student_id {
        certificate::find_by_student_id(catalog, student_id)
    } else if let Some(login_id) = params.login_id.as_deref() {
        certificate::find_by_login_id(catalog, login_id)
    } else if let Some(roll_number) = params.roll_number.as_deref() {
        certificate::find_by_roll_number(catalog, roll_number)
    } else {
        catalog.iter().collect()
    };

    tracing::debug!(count = items.len(), "Listed certificates");
    Ok(Json(DataResponse { data: items }).into_response())
}

// ---------------------------------------------------------------------------
// GET /certificates/{id}
// ---------------------------------------------------------------------------

/// Fetch one certificate by its identifier.
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let record = certificate::find_by_id(&state.catalog.certificates, &id)
        .ok_or_else(|| AppError::Core(CoreError::not_found("Certificate", &id)))?;

    Ok(Json(DataResponse { data: record }).into_response())
}

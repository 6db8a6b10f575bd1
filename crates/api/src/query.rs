//! Shared query parameter types for API handlers.

use serde::Deserialize;

use campusfest_core::event::EventSort;
use campusfest_core::types::StudentId;

/// Query parameters for `GET /events` (`?category=&q=&sort=`).
#[derive(Debug, Default, Deserialize)]
pub struct EventListParams {
    /// Category label or `all`.
    pub category: Option<String>,
    pub q: Option<String>,
    #[serde(default)]
    pub sort: EventSort,
}

/// Query parameters for `GET /certificates`. At most one filter may be set.
#[derive(Debug, Default, Deserialize)]
pub struct CertificateFilterParams {
    pub student_id: Option<StudentId>,
    pub login_id: Option<String>,
    pub roll_number: Option<String>,
}

/// Query parameters for `GET /analytics/top-events`.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

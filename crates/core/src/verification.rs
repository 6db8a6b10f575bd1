//! Certificate verification by weighted field matching.
//!
//! A caller submits whatever certificate details they know. Every record in
//! the catalog is scored against those details and the records that reach
//! [`MATCH_THRESHOLD`] are returned in catalog order.
//!
//! The optional fields (event name, event date, roll number, login id) count
//! as matching when the query leaves them blank. A near-empty query therefore
//! scores 8 against every record and matches the whole catalog. This is the
//! established verification behaviour and is kept as is.

use serde::{Deserialize, Serialize};

use crate::certificate::CertificateRecord;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Case-insensitive exact student name.
pub const WEIGHT_STUDENT_NAME: u32 = 3;

/// Case-insensitive event name substring (vacuous when blank).
pub const WEIGHT_EVENT_NAME: u32 = 2;

/// Exact event date (vacuous when blank).
pub const WEIGHT_EVENT_DATE: u32 = 1;

/// Exact roll number (vacuous when blank).
pub const WEIGHT_ROLL_NUMBER: u32 = 2;

/// Exact login id (vacuous when blank).
pub const WEIGHT_LOGIN_ID: u32 = 3;

/// Minimum score for a record to be reported as a match.
pub const MATCH_THRESHOLD: u32 = 4;

pub const MSG_NO_MATCH: &str = "No matching certificates found in database";
pub const MSG_VERIFIED: &str = "Certificate verified successfully";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Certificate details supplied by the verifier. Every field is optional and
/// an empty string is treated the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub student_name: Option<String>,
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub roll_number: Option<String>,
    pub login_id: Option<String>,
}

impl SearchQuery {
    fn student_name(&self) -> Option<&str> {
        present(&self.student_name)
    }

    fn event_name(&self) -> Option<&str> {
        present(&self.event_name)
    }

    fn event_date(&self) -> Option<&str> {
        present(&self.event_date)
    }

    fn roll_number(&self) -> Option<&str> {
        present(&self.roll_number)
    }

    fn login_id(&self) -> Option<&str> {
        present(&self.login_id)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// How many records cleared the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    NoMatch,
    Verified,
    Multiple(usize),
}

impl MatchOutcome {
    fn from_count(count: usize) -> Self {
        match count {
            0 => MatchOutcome::NoMatch,
            1 => MatchOutcome::Verified,
            n => MatchOutcome::Multiple(n),
        }
    }

    /// Human-readable summary shown to the verifier.
    pub fn message(self) -> String {
        match self {
            MatchOutcome::NoMatch => MSG_NO_MATCH.to_string(),
            MatchOutcome::Verified => MSG_VERIFIED.to_string(),
            MatchOutcome::Multiple(n) => format!("Found {n} matching certificates"),
        }
    }
}

/// Result of a verification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub valid: bool,
    pub message: String,
    pub certificates: Vec<CertificateRecord>,
}

impl VerificationResult {
    /// Re-derive the outcome from the number of returned certificates.
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_count(self.certificates.len())
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a single record against the query.
pub fn score(query: &SearchQuery, record: &CertificateRecord) -> u32 {
    let name_match = query
        .student_name()
        .is_some_and(|name| record.student_name.to_lowercase() == name.to_lowercase());

    let event_match = query.event_name().map_or(true, |event| {
        record
            .event_name
            .to_lowercase()
            .contains(&event.to_lowercase())
    });

    let date_match = query.event_date().map_or(true, |d| record.event_date == d);
    let roll_match = query
        .roll_number()
        .map_or(true, |r| record.student_roll_number == r);
    let login_match = query
        .login_id()
        .map_or(true, |l| record.student_login_id == l);

    [
        (name_match, WEIGHT_STUDENT_NAME),
        (event_match, WEIGHT_EVENT_NAME),
        (date_match, WEIGHT_EVENT_DATE),
        (roll_match, WEIGHT_ROLL_NUMBER),
        (login_match, WEIGHT_LOGIN_ID),
    ]
    .iter()
    .filter(|(matched, _)| *matched)
    .map(|(_, weight)| weight)
    .sum()
}

/// Whether a record reaches the match threshold.
pub fn is_match(query: &SearchQuery, record: &CertificateRecord) -> bool {
    score(query, record) >= MATCH_THRESHOLD
}

/// Verify the query against the catalog.
///
/// Never fails: missing fields are meaningful, not errors, and an empty
/// catalog simply yields the no-match result.
pub fn verify(query: &SearchQuery, catalog: &[CertificateRecord]) -> VerificationResult {
    let certificates: Vec<CertificateRecord> = catalog
        .iter()
        .filter(|record| is_match(query, record))
        .cloned()
        .collect();

    let outcome = MatchOutcome::from_count(certificates.len());
    tracing::debug!(
        searched = catalog.len(),
        matched = certificates.len(),
        "Certificate verification scored"
    );

    VerificationResult {
        valid: outcome != MatchOutcome::NoMatch,
        message: outcome.message(),
        certificates,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::certificate::tests::record;

    fn catalog() -> Vec<CertificateRecord> {
        vec![
            record("C1", 1, "STU2024001", "John Doe", "CS2024001", "Annual Tech Fest 2026", "2026-03-15"),
            record("C2", 1, "STU2024001", "John Doe", "CS2024001", "Cultural Fiesta 2026", "2026-02-20"),
            record("C3", 2, "STU2024002", "Jane Smith", "EC2024045", "Inter-College Sports Meet 2026", "2026-02-25"),
        ]
    }

    fn query() -> SearchQuery {
        SearchQuery::default()
    }

    fn ids(result: &VerificationResult) -> Vec<&str> {
        result.certificates.iter().map(|c| c.id.as_str()).collect()
    }

    // -- score ---------------------------------------------------------------

    #[test]
    fn empty_query_scores_vacuous_fields_only() {
        let cat = catalog();
        assert_eq!(score(&query(), &cat[0]), 8);
    }

    #[test]
    fn exact_name_adds_three() {
        let cat = catalog();
        let q = SearchQuery {
            student_name: Some("john doe".into()),
            ..query()
        };
        assert_eq!(score(&q, &cat[0]), 11);
        assert_eq!(score(&q, &cat[2]), 8);
    }

    #[test]
    fn name_is_not_a_substring_match() {
        let cat = catalog();
        let q = SearchQuery {
            student_name: Some("John".into()),
            ..query()
        };
        assert_eq!(score(&q, &cat[0]), 8);
    }

    #[test]
    fn event_name_is_case_insensitive_substring() {
        let cat = catalog();
        let q = SearchQuery {
            event_name: Some("tech FEST".into()),
            ..query()
        };
        assert_eq!(score(&q, &cat[0]), 8);
        assert_eq!(score(&q, &cat[1]), 6);
    }

    #[test]
    fn mismatched_optional_fields_lose_their_points() {
        let cat = catalog();
        let q = SearchQuery {
            event_date: Some("1999-01-01".into()),
            roll_number: Some("XX".into()),
            login_id: Some("NOPE".into()),
            ..query()
        };
        assert_eq!(score(&q, &cat[0]), WEIGHT_EVENT_NAME);
    }

    #[test]
    fn optional_fields_are_case_sensitive() {
        let cat = catalog();
        let q = SearchQuery {
            login_id: Some("stu2024001".into()),
            ..query()
        };
        assert_eq!(score(&q, &cat[0]), 5);
    }

    #[test]
    fn empty_strings_behave_like_missing_fields() {
        let cat = catalog();
        let q = SearchQuery {
            student_name: Some(String::new()),
            event_name: Some(String::new()),
            event_date: Some(String::new()),
            roll_number: Some(String::new()),
            login_id: Some(String::new()),
        };
        assert_eq!(score(&q, &cat[0]), score(&query(), &cat[0]));
    }

    #[test]
    fn full_match_scores_eleven() {
        let cat = catalog();
        let q = SearchQuery {
            student_name: Some("John Doe".into()),
            event_name: Some("Tech Fest".into()),
            event_date: Some("2026-03-15".into()),
            roll_number: Some("CS2024001".into()),
            login_id: Some("STU2024001".into()),
        };
        assert_eq!(score(&q, &cat[0]), 11);
    }

    // -- verify --------------------------------------------------------------

    #[test]
    fn empty_query_matches_whole_catalog() {
        let cat = catalog();
        let result = verify(&query(), &cat);
        assert!(result.valid);
        assert_eq!(result.message, "Found 3 matching certificates");
        assert_eq!(ids(&result), vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn empty_catalog_is_no_match() {
        let result = verify(&query(), &[]);
        assert!(!result.valid);
        assert_eq!(result.message, MSG_NO_MATCH);
        assert!(result.certificates.is_empty());
        assert_matches!(result.outcome(), MatchOutcome::NoMatch);
    }

    #[test]
    fn unknown_name_alone_does_not_exclude() {
        let cat = catalog();
        let q = SearchQuery {
            student_name: Some("Nobody Here".into()),
            ..query()
        };
        assert_eq!(verify(&q, &cat).certificates.len(), 3);
    }

    #[test]
    fn name_and_event_substring_single_match() {
        let cat = vec![catalog().remove(0)];
        let q = SearchQuery {
            student_name: Some("John Doe".into()),
            event_name: Some("Tech Fest".into()),
            ..query()
        };
        assert_eq!(score(&q, &cat[0]), 11);
        let result = verify(&q, &cat);
        assert!(result.valid);
        assert_eq!(result.message, MSG_VERIFIED);
        assert_eq!(ids(&result), vec!["C1"]);
        assert_matches!(result.outcome(), MatchOutcome::Verified);
    }

    #[test]
    fn mismatched_identity_fields_narrow_to_one() {
        let cat = catalog();
        let q = SearchQuery {
            student_name: Some("John Doe".into()),
            event_name: Some("Tech Fest".into()),
            event_date: Some("2026-03-15".into()),
            roll_number: Some("ZZ".into()),
            login_id: Some("ZZ".into()),
        };
        // C1: 3 + 2 + 1 = 6; C2: name only = 3; C3: 0.
        let result = verify(&q, &cat);
        assert_eq!(ids(&result), vec!["C1"]);
        assert_eq!(result.message, MSG_VERIFIED);
    }

    #[test]
    fn login_id_selects_students_certificates() {
        let cat = catalog();
        let q = SearchQuery {
            login_id: Some("STU2024001".into()),
            roll_number: Some("CS2024001".into()),
            event_date: Some("2026-03-15".into()),
            event_name: Some("zzz".into()),
            ..query()
        };
        // C1: login 3 + roll 2 + date 1 = 6; C2: login 3 + roll 2 = 5; C3: 0.
        let result = verify(&q, &cat);
        assert_eq!(ids(&result), vec!["C1", "C2"]);
        assert_eq!(result.message, "Found 2 matching certificates");
        assert_matches!(result.outcome(), MatchOutcome::Multiple(2));
    }

    #[test]
    fn login_id_of_other_student_still_matches_on_vacuous_fields() {
        let cat = catalog();
        let q = SearchQuery {
            login_id: Some("STU2024002".into()),
            ..query()
        };
        // Non-owners keep 2 + 1 + 2 = 5 from the blank fields.
        assert_eq!(verify(&q, &cat).certificates.len(), 3);
    }

    #[test]
    fn all_mismatched_fields_is_no_match() {
        let cat = catalog();
        let q = SearchQuery {
            student_name: Some("Ghost".into()),
            event_name: Some("Nonexistent".into()),
            event_date: Some("2000-01-01".into()),
            roll_number: Some("NONE".into()),
            login_id: Some("NONE".into()),
        };
        let result = verify(&q, &cat);
        assert!(!result.valid);
        assert_eq!(result.message, MSG_NO_MATCH);
    }

    #[test]
    fn results_keep_catalog_order() {
        let mut cat = catalog();
        cat.reverse();
        let result = verify(&query(), &cat);
        assert_eq!(ids(&result), vec!["C3", "C2", "C1"]);
    }

    // -- serde ---------------------------------------------------------------

    #[test]
    fn query_accepts_partial_camel_case_json() {
        let q: SearchQuery =
            serde_json::from_str(r#"{"studentName":"Jane Smith","loginId":"STU2024002"}"#)
                .unwrap();
        assert_eq!(q.student_name.as_deref(), Some("Jane Smith"));
        assert_eq!(q.login_id.as_deref(), Some("STU2024002"));
        assert!(q.event_name.is_none());

        let empty: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SearchQuery::default());
    }
}

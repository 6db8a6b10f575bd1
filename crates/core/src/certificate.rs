//! Certificate records and the read-only lookups over them.
//!
//! Certificates are part of the seed catalog and are never created, updated,
//! or deleted at runtime. All functions here borrow the catalog and return
//! references into it.

use serde::{Deserialize, Serialize};

use crate::types::{EventId, StudentId};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Outcome category recorded on a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementType {
    Winner,
    #[serde(rename = "Runner-up")]
    RunnerUp,
    Participation,
    #[serde(rename = "Special Recognition")]
    SpecialRecognition,
}

impl AchievementType {
    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            AchievementType::Winner => "Winner",
            AchievementType::RunnerUp => "Runner-up",
            AchievementType::Participation => "Participation",
            AchievementType::SpecialRecognition => "Special Recognition",
        }
    }
}

/// A certificate issued to a student for an event.
///
/// The event fields are a denormalized copy taken at issue time, not a live
/// reference into the event list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub id: String,
    pub student_id: StudentId,
    pub student_login_id: String,
    pub student_name: String,
    pub student_roll_number: String,
    pub event_id: EventId,
    pub event_name: String,
    pub event_date: String,
    pub achievement_type: AchievementType,
    pub position: Option<String>,
    pub category: String,
    pub issued_date: String,
    pub issued_by: String,
    pub designation: String,
    pub description: String,
    pub verified: bool,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Achievement counts and the combined skill list for a set of certificates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStats {
    pub total: usize,
    pub wins: usize,
    pub runner_up: usize,
    pub participation: usize,
    pub special_recognition: usize,
    /// Distinct skills in order of first appearance.
    pub skills: Vec<String>,
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// First certificate whose `id` equals `id`.
pub fn find_by_id<'a>(catalog: &'a [CertificateRecord], id: &str) -> Option<&'a CertificateRecord> {
    catalog.iter().find(|c| c.id == id)
}

/// All certificates held by the student with `student_id`.
pub fn find_by_student_id(
    catalog: &[CertificateRecord],
    student_id: StudentId,
) -> Vec<&CertificateRecord> {
    catalog.iter().filter(|c| c.student_id == student_id).collect()
}

/// All certificates whose `student_login_id` equals `login_id`.
pub fn find_by_login_id<'a>(
    catalog: &'a [CertificateRecord],
    login_id: &str,
) -> Vec<&'a CertificateRecord> {
    catalog
        .iter()
        .filter(|c| c.student_login_id == login_id)
        .collect()
}

/// All certificates whose `student_roll_number` equals `roll_number`.
pub fn find_by_roll_number<'a>(
    catalog: &'a [CertificateRecord],
    roll_number: &str,
) -> Vec<&'a CertificateRecord> {
    catalog
        .iter()
        .filter(|c| c.student_roll_number == roll_number)
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Count certificates by achievement type and merge their skills.
///
/// Skills are deduplicated by exact value; the first occurrence fixes the
/// position.
pub fn aggregate_stats<'a, I>(records: I) -> AchievementStats
where
    I: IntoIterator<Item = &'a CertificateRecord>,
{
    let mut stats = AchievementStats::default();

    for record in records {
        stats.total += 1;
        match record.achievement_type {
            AchievementType::Winner => stats.wins += 1,
            AchievementType::RunnerUp => stats.runner_up += 1,
            AchievementType::Participation => stats.participation += 1,
            AchievementType::SpecialRecognition => stats.special_recognition += 1,
        }
        for skill in &record.skills {
            if !stats.skills.contains(skill) {
                stats.skills.push(skill.clone());
            }
        }
    }

    stats
}

/// Achievement stats for a single student.
pub fn student_achievement_stats(
    catalog: &[CertificateRecord],
    student_id: StudentId,
) -> AchievementStats {
    aggregate_stats(find_by_student_id(catalog, student_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

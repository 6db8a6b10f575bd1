//! Student and admin directory.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::event::Event;
use crate::types::{EventId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub login_id: String,
    pub name: String,
    pub email: String,
    pub roll_number: String,
    pub department: String,
    pub year: String,
    pub avatar: String,
    #[serde(default)]
    pub registered_events: Vec<EventId>,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub designation: String,
    pub avatar: String,
    pub department: String,
}

/// Editable profile fields. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub bio: Option<String>,
}

pub fn find_student(students: &[Student], id: StudentId) -> Option<&Student> {
    students.iter().find(|s| s.id == id)
}

/// Events the student registered for, in event-list order.
///
/// Registered ids that do not resolve to an event are skipped.
pub fn registered_events<'a>(events: &'a [Event], student: &Student) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| student.registered_events.contains(&e.id))
        .collect()
}

/// Reject blank names and obviously malformed email addresses.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<(), CoreError> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }
    }

    if let Some(email) = &update.email {
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(CoreError::Validation(format!("Invalid email address: {email}")));
        }
    }

    Ok(())
}

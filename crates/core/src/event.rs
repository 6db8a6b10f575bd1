//! Event listing, filtering and draft validation.
//!
//! Events are read-only seed data. The browse helpers return references in
//! the requested order; the admin mutations only validate drafts and never
//! touch the list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Date, EventId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Category filter value that selects every event.
pub const CATEGORY_ALL: &str = "all";

/// Maximum length of an event title.
pub const MAX_TITLE_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Technical,
    Cultural,
    Sports,
    Workshop,
}

impl EventCategory {
    /// Every category, in display order.
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Technical,
        EventCategory::Cultural,
        EventCategory::Sports,
        EventCategory::Workshop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Technical => "Technical",
            EventCategory::Cultural => "Cultural",
            EventCategory::Sports => "Sports",
            EventCategory::Workshop => "Workshop",
        }
    }

    /// Parse an exact category label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub designation: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub time: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub date: Date,
    pub end_date: Date,
    pub time: String,
    pub venue: String,
    pub category: EventCategory,
    pub image: String,
    pub organizer: String,
    pub organizer_email: String,
    pub max_participants: u32,
    pub registered_count: u32,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
    pub featured: bool,
    pub status: EventStatus,
}

/// Sort order for event listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSort {
    /// Earliest start date first.
    #[default]
    Date,
    /// Most registrations first.
    Popularity,
    /// Alphabetical by title.
    Title,
}

/// Combined filter used by the public event listing.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// `None` selects every category.
    pub category: Option<EventCategory>,
    /// Case-insensitive text matched against title, description and venue.
    pub query: Option<String>,
    pub sort: EventSort,
}

/// Fields an admin submits when creating or editing an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: Date,
    pub end_date: Option<Date>,
    #[serde(default)]
    pub time: String,
    pub venue: String,
    pub category: String,
    pub organizer: String,
    #[serde(default)]
    pub organizer_email: String,
    pub max_participants: i64,
    #[serde(default)]
    pub image: String,
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn find_event(events: &[Event], id: EventId) -> Option<&Event> {
    events.iter().find(|e| e.id == id)
}

pub fn featured(events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|e| e.featured).collect()
}

/// Events in `category`, or all events when `category` is `None`.
pub fn by_category(events: &[Event], category: Option<EventCategory>) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .collect()
}

pub fn by_status(events: &[Event], status: EventStatus) -> Vec<&Event> {
    events.iter().filter(|e| e.status == status).collect()
}

/// Parse a category filter value. `"all"` (or empty) selects everything.
pub fn parse_category_filter(value: &str) -> Result<Option<EventCategory>, CoreError> {
    if value.is_empty() || value == CATEGORY_ALL {
        return Ok(None);
    }
    EventCategory::parse(value)
        .map(Some)
        .ok_or_else(|| CoreError::Validation(format!("Unknown event category: {value}")))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Events whose title or description contains `query` (case-insensitive).
pub fn search<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|e| contains_ci(&e.title, &needle) || contains_ci(&e.description, &needle))
        .collect()
}

/// Admin dashboard search: title or category label.
pub fn admin_search<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|e| contains_ci(&e.title, &needle) || contains_ci(e.category.as_str(), &needle))
        .collect()
}

/// Apply category, text search and sort order in one pass.
pub fn browse<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    let needle = filter
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let mut selected: Vec<&Event> = by_category(events, filter.category)
        .into_iter()
        .filter(|e| {
            needle.as_deref().map_or(true, |n| {
                contains_ci(&e.title, n) || contains_ci(&e.description, n) || contains_ci(&e.venue, n)
            })
        })
        .collect();

    sort_events(&mut selected, filter.sort);
    selected
}

/// Stable in-place sort of an event listing.
pub fn sort_events(events: &mut [&Event], sort: EventSort) {
    match sort {
        EventSort::Date => events.sort_by_key(|e| e.date),
        EventSort::Popularity => events.sort_by(|a, b| b.registered_count.cmp(&a.registered_count)),
        EventSort::Title => events.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Split events into `(upcoming, past)` relative to `today`.
///
/// An event dated today counts as upcoming.
pub fn split_by_date<'a, I>(events: I, today: Date) -> (Vec<&'a Event>, Vec<&'a Event>)
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().partition(|e| e.date >= today)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an admin-submitted event draft.
pub fn validate_event_draft(draft: &EventDraft) -> Result<(), CoreError> {
    let required = [
        ("title", &draft.title),
        ("venue", &draft.venue),
        ("category", &draft.category),
        ("organizer", &draft.organizer),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("{field} must not be empty")));
        }
    }

    if draft.title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LEN} characters"
        )));
    }

    if EventCategory::parse(&draft.category).is_none() {
        return Err(CoreError::Validation(format!(
            "Unknown event category: {}",
            draft.category
        )));
    }

    if let Some(end) = draft.end_date {
        if end < draft.date {
            return Err(CoreError::Validation(
                "endDate must not be before date".to_string(),
            ));
        }
    }

    if draft.max_participants <= 0 {
        return Err(CoreError::Validation(
            "maxParticipants must be positive".to_string(),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

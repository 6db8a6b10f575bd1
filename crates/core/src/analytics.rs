//! Dashboard aggregates over the event and student lists.
//!
//! Pure functions; the caller passes the slices it wants summarized.

use serde::Serialize;

use crate::event::{Event, EventCategory, EventStatus};
use crate::student::Student;

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_registrations: u64,
    pub total_students: usize,
    /// Mean fill rate (registered / capacity) across events, as a rounded
    /// percentage.
    pub average_attendance: u32,
    /// Category with the most events; ties go to the earlier category.
    pub popular_category: Option<EventCategory>,
}

/// Share of the event list belonging to one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: EventCategory,
    pub count: usize,
    pub percentage: f64,
}

pub fn platform_stats(events: &[Event], students: &[Student]) -> PlatformStats {
    let upcoming_events = events
        .iter()
        .filter(|e| e.status == EventStatus::Upcoming)
        .count();

    let total_registrations = events.iter().map(|e| u64::from(e.registered_count)).sum();

    PlatformStats {
        total_events: events.len(),
        upcoming_events,
        total_registrations,
        total_students: students.len(),
        average_attendance: average_fill_percentage(events),
        popular_category: popular_category(events),
    }
}

/// Mean of each event's fill percentage, rounded to the nearest integer.
///
/// Events with zero capacity contribute 0%. An empty list yields 0.
pub fn average_fill_percentage(events: &[Event]) -> u32 {
    if events.is_empty() {
        return 0;
    }

    let total: f64 = events
        .iter()
        .map(|e| {
            if e.max_participants == 0 {
                0.0
            } else {
                f64::from(e.registered_count) / f64::from(e.max_participants) * 100.0
            }
        })
        .sum();

    (total / events.len() as f64).round() as u32
}

fn popular_category(events: &[Event]) -> Option<EventCategory> {
    category_breakdown(events)
        .into_iter()
        .filter(|share| share.count > 0)
        .fold(None, |best: Option<CategoryShare>, share| match best {
            Some(b) if b.count >= share.count => Some(b),
            _ => Some(share),
        })
        .map(|share| share.category)
}

/// Event count and percentage for every known category, in display order.
pub fn category_breakdown(events: &[Event]) -> Vec<CategoryShare> {
    EventCategory::ALL
        .into_iter()
        .map(|category| {
            let count = events.iter().filter(|e| e.category == category).count();
            let percentage = if events.is_empty() {
                0.0
            } else {
                count as f64 / events.len() as f64 * 100.0
            };
            CategoryShare {
                category,
                count,
                percentage,
            }
        })
        .collect()
}

/// The `limit` events with the most registrations, busiest first.
pub fn top_events_by_registrations(events: &[Event], limit: usize) -> Vec<&Event> {
    let mut ranked: Vec<&Event> = events.iter().collect();
    ranked.sort_by(|a, b| b.registered_count.cmp(&a.registered_count));
    ranked.truncate(limit);
    ranked
}

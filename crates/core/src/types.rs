/// Event primary keys are small integers in the seed dataset.
pub type EventId = i64;

/// Student and admin primary keys.
pub type StudentId = i64;

/// Calendar dates carried by events (no time-of-day component).
pub type Date = chrono::NaiveDate;

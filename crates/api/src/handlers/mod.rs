pub mod analytics;
pub mod certificates;
pub mod events;
pub mod students;

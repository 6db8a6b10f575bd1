//! Domain logic for the campusfest event platform.
//!
//! This crate has no I/O beyond loading the seed catalog. Every query
//! function takes the data it works on as an argument, so callers decide
//! where the catalog lives.

pub mod analytics;
pub mod catalog;
pub mod certificate;
pub mod error;
pub mod event;
pub mod student;
pub mod types;
pub mod verification;

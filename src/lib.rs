//! chronicles - Journal timeline and streak reporting
//!
//! Loads dated journal entries and reports daily-entry streaks, the entries
//! written on a given day, and a timeline grouped under relative labels
//! ("Today", "Yesterday", weekday names, short dates).

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChroniclesError;

//! Domain layer - Entries, calendars and temporal aggregation

pub mod aggregator;
pub mod calendar;
pub mod entry;
pub mod journal;
pub mod label;
pub mod streak;
pub mod time_ref;
pub mod words;

pub use aggregator::{EntryGroup, TemporalAggregator};
pub use calendar::{Calendar, Zone};
pub use entry::{InputMethod, JournalEntry};
pub use journal::{HexColor, Journal};
pub use label::RelativeLabel;
pub use streak::{StreakAnchor, StreakCounting, StreakPolicy, StreakResult};
pub use time_ref::TimeReference;

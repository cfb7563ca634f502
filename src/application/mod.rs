//! Application layer - Use cases and orchestration

pub mod dashboard;
pub mod day_entries;
pub mod init;
pub mod list_journals;
pub mod manage_config;
pub mod show_streak;
pub mod snapshot;
pub mod timeline;

pub use dashboard::{DashboardService, DashboardSummary};
pub use day_entries::{DayEntries, DayEntriesService};
pub use list_journals::{list_journals, JournalSummary};
pub use manage_config::ConfigService;
pub use show_streak::StreakService;
pub use snapshot::JournalSnapshot;
pub use timeline::{TimelineGroup, TimelineService};

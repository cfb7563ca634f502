//! Streak use case

use crate::application::JournalSnapshot;
use crate::domain::StreakResult;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{DateTime, Utc};
use tracing::info;

/// Service computing current and longest streaks
pub struct StreakService {
    repository: FileSystemRepository,
}

impl StreakService {
    pub fn new(repository: FileSystemRepository) -> Self {
        StreakService { repository }
    }

    pub fn execute(&self, now: DateTime<Utc>, journal: Option<&str>) -> Result<StreakResult> {
        let snapshot = JournalSnapshot::load(&self.repository, journal)?;
        let result = snapshot
            .aggregator
            .streak(&snapshot.collection.entries, now);

        info!(current = result.current, longest = result.longest, "streak computed");
        Ok(result)
    }
}

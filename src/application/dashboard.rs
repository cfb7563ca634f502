//! Dashboard summary use case

use crate::application::JournalSnapshot;
use crate::domain::StreakResult;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{DateTime, Utc};

/// Headline numbers for a journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub total_entries: usize,
    pub entries_today: usize,
    pub entries_this_week: usize,
    pub total_words: usize,
    pub streak: StreakResult,
}

pub struct DashboardService {
    repository: FileSystemRepository,
}

impl DashboardService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DashboardService { repository }
    }

    pub fn execute(&self, now: DateTime<Utc>, journal: Option<&str>) -> Result<DashboardSummary> {
        let snapshot = JournalSnapshot::load(&self.repository, journal)?;
        let aggregator = &snapshot.aggregator;
        let calendar = aggregator.calendar();
        let entries = &snapshot.collection.entries;
        let today = calendar.day_of(&now);

        let entries_this_week = entries
            .iter()
            .filter(|entry| calendar.same_week(calendar.day_of(&entry.created_at), today))
            .count();

        Ok(DashboardSummary {
            total_entries: entries.len(),
            entries_today: aggregator.entries_on_day(entries, today).len(),
            entries_this_week,
            total_words: entries.iter().map(|entry| entry.words()).sum(),
            streak: aggregator.streak(entries, now),
        })
    }
}

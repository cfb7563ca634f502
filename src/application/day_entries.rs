//! Entries written on one day

use crate::application::JournalSnapshot;
use crate::domain::{JournalEntry, TimeReference};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{DateTime, NaiveDate, Utc};

/// Entries found for a resolved day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntries {
    pub day: NaiveDate,
    pub entries: Vec<JournalEntry>,
}

pub struct DayEntriesService {
    repository: FileSystemRepository,
}

impl DayEntriesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DayEntriesService { repository }
    }

    /// Resolve `time_ref` against today and collect that day's entries
    pub fn execute(
        &self,
        time_ref: &str,
        now: DateTime<Utc>,
        journal: Option<&str>,
    ) -> Result<DayEntries> {
        let time_ref = TimeReference::parse(time_ref)?;
        let snapshot = JournalSnapshot::load(&self.repository, journal)?;

        let today = snapshot.aggregator.calendar().day_of(&now);
        let day = time_ref.resolve(today);
        let entries = snapshot
            .aggregator
            .entries_on_day(&snapshot.collection.entries, day)
            .into_iter()
            .cloned()
            .collect();

        Ok(DayEntries { day, entries })
    }
}

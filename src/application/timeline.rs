//! Timeline use case: entries grouped under relative labels

use crate::application::JournalSnapshot;
use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineGroup {
    pub label: String,
    pub entries: Vec<JournalEntry>,
}

pub struct TimelineService {
    repository: FileSystemRepository,
}

impl TimelineService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TimelineService { repository }
    }

    /// Groups ordered most recent first; entries within a group newest first
    pub fn execute(&self, now: DateTime<Utc>, journal: Option<&str>) -> Result<Vec<TimelineGroup>> {
        let snapshot = JournalSnapshot::load(&self.repository, journal)?;

        let mut entries = snapshot.collection.entries;
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let groups = snapshot
            .aggregator
            .group_by_relative_label(&entries, now)
            .into_iter()
            .map(|group| TimelineGroup {
                label: group.label,
                entries: group.entries.into_iter().cloned().collect(),
            })
            .collect();

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::Zone;
    use chrono::{TimeZone, Weekday};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_groups_newest_first() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Zone::utc(), Weekday::Mon).unwrap();
        fs::write(
            temp.path().join("entries.toml"),
            r#"
[[entry]]
id = "old"
journal_id = "daily"
created_at = "2024-12-06T10:00:00Z"

[[entry]]
id = "morning"
journal_id = "daily"
created_at = "2025-01-15T07:00:00Z"

[[entry]]
id = "monday"
journal_id = "daily"
created_at = "2025-01-13T10:00:00Z"

[[entry]]
id = "evening"
journal_id = "daily"
created_at = "2025-01-15T19:00:00Z"
"#,
        )
        .unwrap();

        let service = TimelineService::new(FileSystemRepository::new(temp.path().to_path_buf()));
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 20, 0, 0).unwrap();
        let groups = service.execute(now, None).unwrap();

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Today", "Monday", "Dec 6"]);

        let today: Vec<&str> = groups[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(today, vec!["evening", "morning"]);
    }
}

//! List journals use case

use crate::domain::Journal;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalSummary {
    pub journal: Journal,
    pub entries: usize,
    pub last_entry: Option<DateTime<Utc>>,
}

/// Declared journals first, then journals only referenced by entries.
pub fn list_journals(repository: &FileSystemRepository) -> Result<Vec<JournalSummary>> {
    let collection = repository.load_entries()?;
    let mut summaries: Vec<JournalSummary> = collection
        .journals
        .iter()
        .cloned()
        .map(|journal| JournalSummary {
            journal,
            entries: 0,
            last_entry: None,
        })
        .collect();

    for entry in &collection.entries {
        let position = match summaries
            .iter()
            .position(|summary| summary.journal.id == entry.journal_id)
        {
            Some(position) => position,
            None => {
                summaries.push(JournalSummary {
                    journal: Journal::new(entry.journal_id.clone(), entry.journal_id.clone()),
                    entries: 0,
                    last_entry: None,
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[position];
        summary.entries += 1;
        summary.last_entry = summary.last_entry.max(Some(entry.created_at));
    }

    Ok(summaries)
}

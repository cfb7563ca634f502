//! Configuration and entries loaded together for a single report

use crate::domain::TemporalAggregator;
use crate::error::{ChroniclesError, Result};
use crate::infrastructure::{EntryCollection, FileSystemRepository, JournalRepository};
use tracing::debug;

/// Aggregator configured for the journal plus the entries to report on
#[derive(Debug, Clone)]
pub struct JournalSnapshot {
    pub aggregator: TemporalAggregator,
    pub collection: EntryCollection,
}

impl JournalSnapshot {
    /// Load config and entries, optionally restricted to one journal
    pub fn load(repository: &FileSystemRepository, journal: Option<&str>) -> Result<Self> {
        let config = repository.load_config()?;
        let aggregator = config.aggregator()?;
        let collection = repository.load_entries()?;

        if let Some(id) = journal {
            let known = collection.journal(id).is_some()
                || collection.entries.iter().any(|entry| entry.journal_id == id);
            if !known {
                return Err(ChroniclesError::Config(format!("Unknown journal: '{}'", id)));
            }
        }

        let collection = collection.filter_journal(journal);
        debug!(
            entries = collection.entries.len(),
            journal = journal.unwrap_or("*"),
            "journal snapshot loaded"
        );

        Ok(JournalSnapshot {
            aggregator,
            collection,
        })
    }
}

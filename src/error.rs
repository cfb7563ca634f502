//! Error types for chronicles

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chronicles application
#[derive(Debug, Error)]
pub enum ChroniclesError {
    #[error("Not a chronicles directory: {0}")]
    NotChroniclesDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Duplicate entry id: {0}")]
    DuplicateEntryId(String),

    #[error("Failed to read entries from {path}: {message}")]
    EntryFile { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChroniclesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChroniclesError::NotChroniclesDirectory(_) => 2,
            ChroniclesError::InvalidTimeReference(_) | ChroniclesError::InvalidTimestamp(_) => 3,
            ChroniclesError::DuplicateEntryId(_) | ChroniclesError::EntryFile { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChroniclesError::NotChroniclesDirectory(path) => {
                format!(
                    "Not a chronicles directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'chronicles init' in this directory to create a new journal\n\
                    • Navigate to an existing chronicles directory\n\
                    • Set CHRONICLES_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            ChroniclesError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    chronicles day today\n\
                    chronicles day last monday\n\
                    chronicles day 2025-01-15",
                    ref_str
                )
            }
            ChroniclesError::InvalidTimestamp(value) => {
                format!(
                    "Invalid timestamp: '{}'\n\n\
                    Expected an RFC 3339 timestamp, e.g. 2025-01-17T09:30:00+02:00",
                    value
                )
            }
            ChroniclesError::DuplicateEntryId(id) => {
                format!(
                    "Duplicate entry id: '{}'\n\n\
                    Suggestions:\n\
                    • Entry ids must be unique across every entry file in the journal\n\
                    • Rename one of the entries or remove the duplicate file",
                    id
                )
            }
            ChroniclesError::Config(msg) => {
                if msg.contains("timezone") {
                    format!(
                        "{}\n\n\
                        Valid timezones: local, utc, +HH:MM, -HH:MM\n\
                        Example: chronicles config timezone +02:00",
                        msg
                    )
                } else if msg.contains("week start") {
                    format!(
                        "{}\n\n\
                        Valid values: monday, tuesday, ..., sunday\n\
                        Example: chronicles config week_start sunday",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChroniclesError
pub type Result<T> = std::result::Result<T, ChroniclesError>;

//! Journal entries

use crate::domain::words::count_words;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How an entry's text was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    #[default]
    Text,
    Voice,
    Prompt,
}

/// A single dated journal entry.
///
/// Only `id` and `created_at` matter to the temporal aggregation; the other
/// fields are carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub journal_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default)]
    pub input_method: InputMethod,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JournalEntry {
    pub fn new(
        id: impl Into<String>,
        journal_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        JournalEntry {
            id: id.into(),
            journal_id: journal_id.into(),
            title: String::new(),
            content: String::new(),
            word_count: None,
            input_method: InputMethod::default(),
            created_at,
            updated_at: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Stored word count, or the count of words in the markdown content
    pub fn words(&self) -> usize {
        self.word_count
            .unwrap_or_else(|| count_words(&self.content))
    }

    /// Title for display, falling back to the first line of content
    pub fn display_title(&self) -> &str {
        if !self.title.trim().is_empty() {
            return self.title.trim();
        }
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("(untitled)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_words_prefers_stored_count() {
        let mut entry = JournalEntry::new("e1", "daily", ts()).with_content("one two three");
        assert_eq!(entry.words(), 3);

        entry.word_count = Some(42);
        assert_eq!(entry.words(), 42);
    }

    #[test]
    fn test_display_title_fallback() {
        let entry = JournalEntry::new("e1", "daily", ts()).with_content("\n  First line\nSecond");
        assert_eq!(entry.display_title(), "First line");

        let titled = entry.clone().with_title("Morning");
        assert_eq!(titled.display_title(), "Morning");

        let empty = JournalEntry::new("e2", "daily", ts());
        assert_eq!(empty.display_title(), "(untitled)");
    }

    #[test]
    fn test_deserialize_with_offset() {
        let raw = r#"
            id = "e1"
            journal_id = "daily"
            created_at = "2025-01-17T11:30:00+02:00"
            input_method = "voice"
        "#;
        let entry: JournalEntry = toml::from_str(raw).unwrap();
        assert_eq!(entry.created_at, ts());
        assert_eq!(entry.input_method, InputMethod::Voice);
        assert!(entry.updated_at.is_none());
        assert!(entry.title.is_empty());
    }
}

//! File system repository

use crate::domain::{Journal, JournalEntry};
use crate::error::{ChroniclesError, Result};
use crate::infrastructure::Config;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Environment variable pointing at the journal root
pub const ROOT_ENV: &str = "CHRONICLES_ROOT";

const STATE_DIR: &str = ".chronicles";

/// Journals and entries loaded from a journal root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCollection {
    pub journals: Vec<Journal>,
    pub entries: Vec<JournalEntry>,
}

impl EntryCollection {
    /// Keep only entries of `journal_id`; `None` keeps everything
    pub fn filter_journal(mut self, journal_id: Option<&str>) -> Self {
        if let Some(id) = journal_id {
            self.entries.retain(|entry| entry.journal_id == id);
        }
        self
    }

    pub fn journal(&self, id: &str) -> Option<&Journal> {
        self.journals.iter().find(|journal| journal.id == id)
    }
}

/// One entry file on disk
#[derive(Debug, Default, Deserialize)]
struct EntryFile {
    #[serde(default, rename = "journal")]
    journals: Vec<Journal>,
    #[serde(default, rename = "entry")]
    entries: Vec<JournalEntry>,
}

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .chronicles/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .chronicles/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .chronicles directory exists
    fn is_initialized(&self) -> bool;

    /// Create .chronicles directory structure
    fn initialize(&self) -> Result<()>;

    /// Read every journal and entry below the root
    fn load_entries(&self) -> Result<EntryCollection>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks CHRONICLES_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ChroniclesError::Config(format!(
                    "{} is set to '{}' but no .chronicles directory found. \
                    Run 'chronicles init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ChroniclesError::NotChroniclesDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }

    /// Entry files below the root, sorted by path, skipping hidden directories
    fn entry_files(&self) -> Vec<PathBuf> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .map_or(true, |name| !name.starts_with('.'))
            });

        walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable path");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect()
    }

    fn read_entry_file(path: &Path) -> Result<EntryFile> {
        let contents = fs::read_to_string(path).map_err(|e| ChroniclesError::EntryFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ChroniclesError::EntryFile {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let state_dir = self.root.join(STATE_DIR);

        if state_dir.exists() {
            return Err(ChroniclesError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }

    fn load_entries(&self) -> Result<EntryCollection> {
        let mut collection = EntryCollection::default();
        let mut entry_ids = HashSet::new();

        for path in self.entry_files() {
            let file = Self::read_entry_file(&path)?;
            debug!(
                path = %path.display(),
                journals = file.journals.len(),
                entries = file.entries.len(),
                "loaded entry file"
            );

            for journal in file.journals {
                if collection.journal(&journal.id).is_some() {
                    warn!(journal = %journal.id, path = %path.display(), "ignoring duplicate journal");
                    continue;
                }
                collection.journals.push(journal);
            }

            for entry in file.entries {
                if !entry_ids.insert(entry.id.clone()) {
                    return Err(ChroniclesError::DuplicateEntryId(entry.id));
                }
                collection.entries.push(entry);
            }
        }

        Ok(collection)
    }
}

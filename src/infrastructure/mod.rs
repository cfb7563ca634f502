//! Infrastructure layer - Configuration and entry files on disk

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{EntryCollection, FileSystemRepository, JournalRepository};

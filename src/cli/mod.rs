//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_dashboard, format_day_entries, format_journal_list, format_streak, format_timeline,
};

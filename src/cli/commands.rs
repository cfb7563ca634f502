//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chronicles")]
#[command(about = "Journal timeline and streak reporting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Evaluate as if the current time were this RFC 3339 timestamp
    #[arg(long, global = true, value_name = "TIMESTAMP")]
    pub now: Option<String>,

    /// Only consider entries from this journal
    #[arg(short, long, global = true, value_name = "ID")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Timezone for day boundaries (local, utc, +HH:MM)
        #[arg(short, long, default_value = "local")]
        timezone: String,

        /// First day of the week
        #[arg(short, long, default_value = "monday")]
        week_start: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show the current and longest daily streak
    Streak,

    /// List entries written on a day (e.g., today, yesterday, last monday, 2025-01-17)
    Day {
        #[arg(value_name = "TIME_REF", default_value = "today")]
        time_ref: String,
    },

    /// Show entries grouped by Today, Yesterday, weekday and date
    Timeline,

    /// Show dashboard totals and streaks
    Stats,

    /// List journals and their entry counts
    Journals,
}

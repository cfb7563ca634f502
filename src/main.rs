use chronicles::application::init::init;
use chronicles::application::{
    list_journals, ConfigService, DashboardService, DayEntriesService, StreakService,
    TimelineService,
};
use chronicles::cli::{output, Cli, Commands};
use chronicles::domain::Zone;
use chronicles::error::ChroniclesError;
use chronicles::infrastructure::config::parse_week_start;
use chronicles::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=debug for detailed logs; stdout stays reserved for reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>, ChroniclesError> {
    match raw {
        Some(value) => DateTime::parse_from_rfc3339(value.trim())
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|_| ChroniclesError::InvalidTimestamp(value.to_string())),
        None => Ok(Utc::now()),
    }
}

fn run(cli: Cli) -> Result<(), ChroniclesError> {
    let now = parse_now(cli.now.as_deref())?;
    let journal = cli.journal.as_deref();

    match cli.command {
        Commands::Init {
            path,
            timezone,
            week_start,
        } => {
            let zone = Zone::from_str(&timezone).map_err(ChroniclesError::Config)?;
            let week_start = parse_week_start(&week_start)?;

            init(&path, zone, week_start)?;
            println!("Initialized chronicles journal at {}", path.display());
            println!("Timezone: {}", zone);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: chronicles config [--list | <key> [<value>]]");
                println!("Valid keys: timezone, week_start, streak_counting, streak_anchor, created");
                Ok(())
            }
        }
        Commands::Streak => {
            let repo = FileSystemRepository::discover()?;
            let streak = StreakService::new(repo).execute(now, journal)?;
            print!("{}", output::format_streak(&streak));
            Ok(())
        }
        Commands::Day { time_ref } => {
            let repo = FileSystemRepository::discover()?;
            let calendar = repo.load_config()?.calendar()?;
            let found = DayEntriesService::new(repo).execute(&time_ref, now, journal)?;
            println!("{}", output::format_day_entries(&found, &calendar).trim_end());
            Ok(())
        }
        Commands::Timeline => {
            let repo = FileSystemRepository::discover()?;
            let calendar = repo.load_config()?.calendar()?;
            let groups = TimelineService::new(repo).execute(now, journal)?;
            println!("{}", output::format_timeline(&groups, &calendar).trim_end());
            Ok(())
        }
        Commands::Stats => {
            let repo = FileSystemRepository::discover()?;
            let summary = DashboardService::new(repo).execute(now, journal)?;
            print!("{}", output::format_dashboard(&summary));
            Ok(())
        }
        Commands::Journals => {
            let repo = FileSystemRepository::discover()?;
            let summaries = list_journals(&repo)?;
            println!("{}", output::format_journal_list(&summaries).trim_end());
            Ok(())
        }
    }
}

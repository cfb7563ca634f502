//! Config management use case

use crate::domain::{label, StreakAnchor, StreakCounting, Zone};
use crate::error::{ChroniclesError, Result};
use crate::infrastructure::config::parse_week_start;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;
use tracing::info;

pub const CONFIG_KEYS: [&str; 5] = [
    "timezone",
    "week_start",
    "streak_counting",
    "streak_anchor",
    "created",
];

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        value_of(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "timezone" => {
                config.timezone = Zone::from_str(value).map_err(ChroniclesError::Config)?;
            }
            "week_start" => {
                config.week_start = parse_week_start(value)?;
            }
            "streak_counting" => {
                config.streak.counting =
                    StreakCounting::from_str(value).map_err(ChroniclesError::Config)?;
            }
            "streak_anchor" => {
                config.streak.anchor =
                    StreakAnchor::from_str(value).map_err(ChroniclesError::Config)?;
            }
            "created" => {
                return Err(ChroniclesError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        info!(key, value, "config updated");
        Ok(())
    }

    /// All config values as (key, value) pairs
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| value_of(&config, key).map(|value| (*key, value)))
            .collect()
    }
}

fn value_of(config: &Config, key: &str) -> Result<String> {
    match key {
        "timezone" => Ok(config.timezone.to_string()),
        "week_start" => Ok(label::weekday_name(config.week_start).to_lowercase()),
        "streak_counting" => Ok(config.streak.counting.to_string()),
        "streak_anchor" => Ok(config.streak.anchor.to_string()),
        "created" => Ok(config.created.to_rfc3339()),
        _ => Err(unknown_key(key)),
    }
}

fn unknown_key(key: &str) -> ChroniclesError {
    ChroniclesError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use chrono::Weekday;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Zone::utc(), Weekday::Mon).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("timezone").unwrap(), "utc");
        assert_eq!(service.get("week_start").unwrap(), "monday");
        assert_eq!(service.get("streak_counting").unwrap(), "per-day");
        assert_eq!(service.get("streak_anchor").unwrap(), "today");
    }

    #[test]
    fn test_set_and_get() {
        let (_temp, service) = service();
        service.set("timezone", "-03:00").unwrap();
        service.set("week_start", "Sunday").unwrap();
        service.set("streak_anchor", "yesterday").unwrap();
        service.set("streak_counting", "per-entry").unwrap();

        assert_eq!(service.get("timezone").unwrap(), "-03:00");
        assert_eq!(service.get("week_start").unwrap(), "sunday");
        assert_eq!(service.get("streak_anchor").unwrap(), "yesterday");
        assert_eq!(service.get("streak_counting").unwrap(), "per-entry");
    }

    #[test]
    fn test_set_invalid_values() {
        let (_temp, service) = service();
        assert!(service.set("timezone", "mars").is_err());
        assert!(service.set("week_start", "someday").is_err());
        assert!(service.set("streak_anchor", "tomorrow").is_err());
        assert!(service.set("created", "2025-01-01T00:00:00Z").is_err());
        assert!(service.set("mode", "daily").is_err());
    }

    #[test]
    fn test_list_has_every_key() {
        let (_temp, service) = service();
        let values = service.list().unwrap();
        let keys: Vec<&str> = values.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CONFIG_KEYS.to_vec());
    }
}

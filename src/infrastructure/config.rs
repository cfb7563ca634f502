//! Configuration management

use crate::domain::{Calendar, StreakPolicy, TemporalAggregator, Zone};
use crate::error::{ChroniclesError, Result};
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Environment variable overriding the configured timezone
pub const TIMEZONE_ENV: &str = "CHRONICLES_TZ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timezone: Zone,
    #[serde(default = "default_week_start", with = "weekday_serde")]
    pub week_start: Weekday,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub streak: StreakPolicy,
}

fn default_week_start() -> Weekday {
    Weekday::Mon
}

impl Config {
    /// Create a new config with default streak rules
    pub fn new(timezone: Zone, week_start: Weekday) -> Self {
        Config {
            timezone,
            week_start,
            created: Utc::now(),
            streak: StreakPolicy::default(),
        }
    }

    /// Load config from .chronicles/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".chronicles").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChroniclesError::NotChroniclesDirectory(path.to_path_buf())
            } else {
                ChroniclesError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ChroniclesError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .chronicles/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(".chronicles");
        let config_path = state_dir.join("config.toml");

        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ChroniclesError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Timezone in effect, with CHRONICLES_TZ taking precedence
    pub fn effective_zone(&self) -> Result<Zone> {
        match std::env::var(TIMEZONE_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Zone::from_str(&raw).map_err(|e| {
                ChroniclesError::Config(format!("{} (from {})", e, TIMEZONE_ENV))
            }),
            _ => Ok(self.timezone),
        }
    }

    pub fn calendar(&self) -> Result<Calendar> {
        Ok(Calendar::new(self.effective_zone()?, self.week_start))
    }

    pub fn aggregator(&self) -> Result<TemporalAggregator> {
        Ok(TemporalAggregator::new(self.calendar()?).with_policy(self.streak))
    }
}

/// Parse a weekday given as a full or abbreviated English name
pub fn parse_week_start(value: &str) -> Result<Weekday> {
    Weekday::from_str(value.trim()).map_err(|_| {
        ChroniclesError::Config(format!(
            "Invalid week start: '{}'. Use a weekday name such as monday or sunday",
            value
        ))
    })
}

/// Weekdays stored as lowercase full names ("monday")
mod weekday_serde {
    use crate::domain::label;
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&label::weekday_name(*day).to_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Weekday::from_str(raw.trim())
            .map_err(|_| serde::de::Error::custom(format!("invalid weekday '{}'", raw)))
    }
}

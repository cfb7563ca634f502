//! Calendar rules used to interpret timestamps as days and weeks

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Offset, Utc, Weekday,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Timezone in which day boundaries are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// Host timezone, including daylight saving transitions
    #[default]
    Local,
    /// Constant offset from UTC
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    fn parse_offset(s: &str) -> Option<FixedOffset> {
        let (sign, rest) = match s.as_bytes().first().copied()? {
            b'+' => (1, &s[1..]),
            b'-' => (-1, &s[1..]),
            _ => return None,
        };

        // HHMM or HH:MM
        let (hh, mm) = match rest.len() {
            4 => (rest.get(..2)?, rest.get(2..)?),
            5 if rest.as_bytes()[2] == b':' => (rest.get(..2)?, rest.get(3..)?),
            _ => return None,
        };
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let hours: i32 = hh.parse().ok()?;
        let minutes: i32 = mm.parse().ok()?;
        if hours > 23 || minutes > 59 {
            return None;
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "local" => Ok(Zone::Local),
            "utc" | "z" => Ok(Zone::utc()),
            other => Self::parse_offset(other).map(Zone::Fixed).ok_or_else(|| {
                format!(
                    "Invalid timezone: '{}'. Use local, utc, or an offset like +02:00",
                    s
                )
            }),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Fixed(offset) if offset.local_minus_utc() == 0 => write!(f, "utc"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Zone::from_str(&raw).map_err(serde::de::Error::custom)
    }
}

/// Day and week boundaries for a zone and a first day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    zone: Zone,
    week_start: Weekday,
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar::new(Zone::Local, Weekday::Mon)
    }
}

impl Calendar {
    pub fn new(zone: Zone, week_start: Weekday) -> Self {
        Calendar { zone, week_start }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Calendar day containing `ts`, midnight to midnight in this zone
    pub fn day_of(&self, ts: &DateTime<Utc>) -> NaiveDate {
        match self.zone {
            Zone::Local => ts.with_timezone(&Local).date_naive(),
            Zone::Fixed(offset) => ts.with_timezone(&offset).date_naive(),
        }
    }

    /// Wall-clock time of `ts` in this zone
    pub fn time_of(&self, ts: &DateTime<Utc>) -> NaiveTime {
        match self.zone {
            Zone::Local => ts.with_timezone(&Local).time(),
            Zone::Fixed(offset) => ts.with_timezone(&offset).time(),
        }
    }

    /// First day of the week containing `day`
    pub fn start_of_week(&self, day: NaiveDate) -> NaiveDate {
        let from_start = (day.weekday().num_days_from_monday() + 7
            - self.week_start.num_days_from_monday())
            % 7;
        day - Duration::days(from_start as i64)
    }

    pub fn same_week(&self, a: NaiveDate, b: NaiveDate) -> bool {
        self.start_of_week(a) == self.start_of_week(b)
    }
}

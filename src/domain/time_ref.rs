//! Day references typed on the command line

use crate::error::{ChroniclesError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A day expressed relative to today or as an explicit date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Today if it is that weekday, otherwise its most recent occurrence
    Weekday(Weekday),
    /// Occurrence strictly before today
    LastWeekday(Weekday),
    /// Occurrence strictly after today
    NextWeekday(Weekday),
    Date(NaiveDate),
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d-%m-%Y"];

impl TimeReference {
    /// Parse a day reference such as `yesterday`, `last friday` or `2025-01-17`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || ChroniclesError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return weekday_named(rest)
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return weekday_named(rest)
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = weekday_named(&normalized) {
            return Ok(TimeReference::Weekday(day));
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(&normalized, format).ok())
            .map(TimeReference::Date)
            .ok_or_else(invalid)
    }

    /// Resolve against `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => today,
            TimeReference::Yesterday => today - Duration::days(1),
            TimeReference::Tomorrow => today + Duration::days(1),
            TimeReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            TimeReference::LastWeekday(target) => {
                let back = days_back(today, *target);
                today - Duration::days(if back == 0 { 7 } else { back })
            }
            TimeReference::NextWeekday(target) => {
                let forward = (7 - days_back(today, *target)) % 7;
                today + Duration::days(if forward == 0 { 7 } else { forward })
            }
            TimeReference::Date(date) => *date,
        }
    }
}

/// Days from the most recent `target` (inclusive of today) back to `today`
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday() as i64;
    (current - target.num_days_from_monday() as i64).rem_euclid(7)
}

/// Full weekday names only; abbreviations stay reserved for dates
fn weekday_named(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Friday, Jan 17, 2025
    fn friday() -> NaiveDate {
        date(2025, 1, 17)
    }

    #[test]
    fn test_parse_simple_refs() {
        assert_eq!(TimeReference::parse("today").unwrap(), TimeReference::Today);
        assert_eq!(TimeReference::parse(" Now ").unwrap(), TimeReference::Today);
        assert_eq!(
            TimeReference::parse("yesterday").unwrap(),
            TimeReference::Yesterday
        );
        assert_eq!(
            TimeReference::parse("TOMORROW").unwrap(),
            TimeReference::Tomorrow
        );
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            TimeReference::parse("monday").unwrap(),
            TimeReference::Weekday(Weekday::Mon)
        );
        assert_eq!(
            TimeReference::parse("last friday").unwrap(),
            TimeReference::LastWeekday(Weekday::Fri)
        );
        assert_eq!(
            TimeReference::parse("next sunday").unwrap(),
            TimeReference::NextWeekday(Weekday::Sun)
        );
    }

    #[test]
    fn test_parse_dates() {
        assert_eq!(
            TimeReference::parse("2025-01-17").unwrap(),
            TimeReference::Date(friday())
        );
        assert_eq!(
            TimeReference::parse("17-01-2025").unwrap(),
            TimeReference::Date(friday())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(TimeReference::parse("invalid").is_err());
        assert!(TimeReference::parse("2025-02-30").is_err());
        assert!(TimeReference::parse("32-01-2025").is_err());
        assert!(TimeReference::parse("last week").is_err());
        assert!(TimeReference::parse("next").is_err());
        assert!(TimeReference::parse("mon").is_err());
    }

    #[test]
    fn test_parse_error_keeps_input() {
        match TimeReference::parse("Someday").unwrap_err() {
            ChroniclesError::InvalidTimeReference(raw) => assert_eq!(raw, "Someday"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_relative_days() {
        assert_eq!(TimeReference::Today.resolve(friday()), friday());
        assert_eq!(TimeReference::Yesterday.resolve(friday()), date(2025, 1, 16));
        assert_eq!(TimeReference::Tomorrow.resolve(friday()), date(2025, 1, 18));
    }

    #[test]
    fn test_resolve_weekday() {
        assert_eq!(
            TimeReference::Weekday(Weekday::Fri).resolve(friday()),
            friday()
        );
        assert_eq!(
            TimeReference::Weekday(Weekday::Mon).resolve(friday()),
            date(2025, 1, 13)
        );
        assert_eq!(
            TimeReference::Weekday(Weekday::Sat).resolve(friday()),
            date(2025, 1, 11)
        );
    }

    #[test]
    fn test_resolve_last_weekday() {
        assert_eq!(
            TimeReference::LastWeekday(Weekday::Fri).resolve(friday()),
            date(2025, 1, 10)
        );
        assert_eq!(
            TimeReference::LastWeekday(Weekday::Thu).resolve(friday()),
            date(2025, 1, 16)
        );
    }

    #[test]
    fn test_resolve_next_weekday() {
        assert_eq!(
            TimeReference::NextWeekday(Weekday::Fri).resolve(friday()),
            date(2025, 1, 24)
        );
        assert_eq!(
            TimeReference::NextWeekday(Weekday::Mon).resolve(friday()),
            date(2025, 1, 20)
        );
        assert_eq!(
            TimeReference::NextWeekday(Weekday::Sat).resolve(friday()),
            date(2025, 1, 18)
        );
    }

    #[test]
    fn test_resolve_date() {
        let target = date(2024, 12, 25);
        assert_eq!(TimeReference::Date(target).resolve(friday()), target);
    }
}

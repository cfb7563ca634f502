//! Daily-entry streaks

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How entries on an already counted day contribute to a streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StreakCounting {
    /// Each calendar day with at least one entry counts once
    #[default]
    PerDay,
    /// Every entry on a counted day adds one
    PerEntry,
}

/// Which day a current streak must reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StreakAnchor {
    /// The run must include today; no entry today means no streak
    #[default]
    Today,
    /// The run may end yesterday, so today's entry is still pending
    Yesterday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreakPolicy {
    #[serde(default)]
    pub counting: StreakCounting,
    #[serde(default)]
    pub anchor: StreakAnchor,
}

/// Current and longest streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakResult {
    pub current: u32,
    pub longest: u32,
}

/// Walk back from `today` over entry days, counting the unbroken run.
///
/// `days` holds one calendar day per entry in any order. Days after `today`
/// are skipped without breaking the run.
pub fn current_streak(days: &[NaiveDate], today: NaiveDate, policy: StreakPolicy) -> u32 {
    let mut sorted = days.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0;
    let mut cursor = today;
    let mut last_counted: Option<NaiveDate> = None;

    for day in sorted {
        if Some(day) == last_counted {
            if policy.counting == StreakCounting::PerEntry {
                streak += 1;
            }
            continue;
        }

        if day > cursor {
            // Future-dated
            continue;
        }

        let starts_yesterday = streak == 0
            && policy.anchor == StreakAnchor::Yesterday
            && cursor.pred_opt() == Some(day);

        if day != cursor && !starts_yesterday {
            break;
        }

        streak += 1;
        last_counted = Some(day);
        match day.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    streak
}

/// Longest run of consecutive days on or before `today`
pub fn longest_streak(days: &[NaiveDate], today: NaiveDate, policy: StreakPolicy) -> u32 {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for day in days.iter().filter(|day| **day <= today) {
        *per_day.entry(*day).or_insert(0) += 1;
    }

    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for (day, count) in per_day {
        let weight = match policy.counting {
            StreakCounting::PerDay => 1,
            StreakCounting::PerEntry => count,
        };

        let continues = previous.and_then(|p| p.succ_opt()) == Some(day);
        run = if continues { run + weight } else { weight };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

pub fn streak(days: &[NaiveDate], today: NaiveDate, policy: StreakPolicy) -> StreakResult {
    StreakResult {
        current: current_streak(days, today, policy),
        longest: longest_streak(days, today, policy),
    }
}

impl FromStr for StreakCounting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per-day" | "day" => Ok(StreakCounting::PerDay),
            "per-entry" | "entry" => Ok(StreakCounting::PerEntry),
            _ => Err(format!(
                "Invalid streak counting: '{}'. Valid values are: per-day, per-entry",
                s
            )),
        }
    }
}

impl fmt::Display for StreakCounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreakCounting::PerDay => write!(f, "per-day"),
            StreakCounting::PerEntry => write!(f, "per-entry"),
        }
    }
}

impl FromStr for StreakAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(StreakAnchor::Today),
            "yesterday" => Ok(StreakAnchor::Yesterday),
            _ => Err(format!(
                "Invalid streak anchor: '{}'. Valid values are: today, yesterday",
                s
            )),
        }
    }
}

impl fmt::Display for StreakAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreakAnchor::Today => write!(f, "today"),
            StreakAnchor::Yesterday => write!(f, "yesterday"),
        }
    }
}

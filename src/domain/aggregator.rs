//! Temporal aggregation over journal entries
//!
//! Streaks, day filtering and relative-label grouping. Every operation is a
//! pure function of the entries, an explicit `now`, and the aggregator's
//! calendar; nothing reads the system clock.
//!
//! # Examples
//!
//! ```
//! use chronicles::domain::{Calendar, JournalEntry, TemporalAggregator, Zone};
//! use chrono::{TimeZone, Utc, Weekday};
//!
//! let aggregator = TemporalAggregator::new(Calendar::new(Zone::utc(), Weekday::Mon));
//! let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
//! let entries = vec![JournalEntry::new("e1", "daily", now)];
//!
//! assert_eq!(aggregator.current_streak(&entries, now), 1);
//! assert_eq!(aggregator.group_by_relative_label(&entries, now)[0].label, "Today");
//! ```

use crate::domain::calendar::Calendar;
use crate::domain::entry::JournalEntry;
use crate::domain::label::RelativeLabel;
use crate::domain::streak::{self, StreakPolicy, StreakResult};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

/// Entries sharing a relative label, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGroup<'a> {
    pub label: String,
    pub entries: Vec<&'a JournalEntry>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalAggregator {
    calendar: Calendar,
    policy: StreakPolicy,
}

impl TemporalAggregator {
    pub fn new(calendar: Calendar) -> Self {
        TemporalAggregator {
            calendar,
            policy: StreakPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StreakPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn policy(&self) -> StreakPolicy {
        self.policy
    }

    /// Entries created on `day`, in input order
    pub fn entries_on_day<'a>(
        &self,
        entries: &'a [JournalEntry],
        day: NaiveDate,
    ) -> Vec<&'a JournalEntry> {
        entries
            .iter()
            .filter(|entry| self.calendar.day_of(&entry.created_at) == day)
            .collect()
    }

    /// Consecutive days with entries, walking back from today
    pub fn current_streak(&self, entries: &[JournalEntry], now: DateTime<Utc>) -> u32 {
        streak::current_streak(&self.entry_days(entries), self.calendar.day_of(&now), self.policy)
    }

    pub fn streak(&self, entries: &[JournalEntry], now: DateTime<Utc>) -> StreakResult {
        streak::streak(&self.entry_days(entries), self.calendar.day_of(&now), self.policy)
    }

    /// Group entries under their relative label, most recent group first.
    ///
    /// Groups are ordered by the `created_at` of their first entry; equal
    /// timestamps keep the order in which the groups were first seen.
    pub fn group_by_relative_label<'a>(
        &self,
        entries: &'a [JournalEntry],
        now: DateTime<Utc>,
    ) -> Vec<EntryGroup<'a>> {
        let today = self.calendar.day_of(&now);
        let mut groups: Vec<EntryGroup<'a>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for entry in entries {
            let day = self.calendar.day_of(&entry.created_at);
            let label = RelativeLabel::for_day(day, today, &self.calendar).to_string();

            match index.get(&label) {
                Some(&position) => groups[position].entries.push(entry),
                None => {
                    index.insert(label.clone(), groups.len());
                    groups.push(EntryGroup {
                        label,
                        entries: vec![entry],
                    });
                }
            }
        }

        // Stable sort keeps first-seen order on ties
        groups.sort_by(|a, b| b.entries[0].created_at.cmp(&a.entries[0].created_at));
        groups
    }

    fn entry_days(&self, entries: &[JournalEntry]) -> Vec<NaiveDate> {
        entries
            .iter()
            .map(|entry| self.calendar.day_of(&entry.created_at))
            .collect()
    }
}

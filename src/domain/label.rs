//! Relative date labels ("Today", "Yesterday", weekday, "Mon D")

use crate::domain::calendar::Calendar;
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use std::fmt;

/// Short description of a timestamp's recency relative to now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeLabel {
    Today,
    Yesterday,
    /// Earlier (or later) in the current calendar week
    Weekday(Weekday),
    /// Outside the current week
    Date(NaiveDate),
}

impl RelativeLabel {
    /// Label `ts` relative to `now` using the calendar's days and weeks
    pub fn for_timestamp(ts: &DateTime<Utc>, now: &DateTime<Utc>, calendar: &Calendar) -> Self {
        Self::for_day(calendar.day_of(ts), calendar.day_of(now), calendar)
    }

    pub fn for_day(day: NaiveDate, today: NaiveDate, calendar: &Calendar) -> Self {
        if day == today {
            RelativeLabel::Today
        } else if today.pred_opt() == Some(day) {
            RelativeLabel::Yesterday
        } else if calendar.same_week(day, today) {
            RelativeLabel::Weekday(day.weekday())
        } else {
            RelativeLabel::Date(day)
        }
    }
}

impl fmt::Display for RelativeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeLabel::Today => write!(f, "Today"),
            RelativeLabel::Yesterday => write!(f, "Yesterday"),
            RelativeLabel::Weekday(day) => write!(f, "{}", weekday_name(*day)),
            RelativeLabel::Date(date) => write!(f, "{}", date.format("%b %-d")),
        }
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

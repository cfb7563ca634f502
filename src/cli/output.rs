//! Output formatting utilities

use crate::application::{DashboardSummary, DayEntries, JournalSummary, TimelineGroup};
use crate::domain::{Calendar, JournalEntry, StreakResult};

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn entry_line(entry: &JournalEntry, calendar: &Calendar) -> String {
    format!(
        "  {}  {} ({})\n",
        calendar.time_of(&entry.created_at).format("%H:%M"),
        entry.display_title(),
        plural(entry.words(), "word", "words")
    )
}

/// Format current and longest streak
pub fn format_streak(streak: &StreakResult) -> String {
    format!(
        "Current streak: {}\nLongest streak: {}\n",
        plural(streak.current as usize, "day", "days"),
        plural(streak.longest as usize, "day", "days")
    )
}

/// Format the entries of a single day
pub fn format_day_entries(found: &DayEntries, calendar: &Calendar) -> String {
    let heading = found.day.format("%A, %b %-d, %Y");
    if found.entries.is_empty() {
        return format!("No entries on {}", heading);
    }

    let mut output = format!("{}\n", heading);
    for entry in &found.entries {
        output.push_str(&entry_line(entry, calendar));
    }
    output
}

/// Format timeline groups, one heading per label
pub fn format_timeline(groups: &[TimelineGroup], calendar: &Calendar) -> String {
    if groups.is_empty() {
        return "No entries found".to_string();
    }

    let sections: Vec<String> = groups
        .iter()
        .map(|group| {
            let mut section = format!("{}\n", group.label);
            for entry in &group.entries {
                section.push_str(&entry_line(entry, calendar));
            }
            section
        })
        .collect();

    sections.join("\n")
}

pub fn format_dashboard(summary: &DashboardSummary) -> String {
    format!(
        "Entries:         {}\n\
         Today:           {}\n\
         This week:       {}\n\
         Words:           {}\n\
         {}",
        summary.total_entries,
        summary.entries_today,
        summary.entries_this_week,
        summary.total_words,
        format_streak(&summary.streak)
    )
}

/// Format journals with entry counts and colors
pub fn format_journal_list(summaries: &[JournalSummary]) -> String {
    if summaries.is_empty() {
        return "No journals found".to_string();
    }

    let mut output = String::new();
    for summary in summaries {
        output.push_str(&format!(
            "{}  {} ({})",
            summary.journal.id,
            summary.journal.title,
            plural(summary.entries, "entry", "entries")
        ));
        if let Some(color) = summary.journal.color {
            output.push_str(&format!("  {}", color));
        }
        output.push('\n');
    }
    output
}

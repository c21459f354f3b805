//! Human-readable rendering of plans and schedule entries.

use crate::scope::{resolve_scope, total_chapters};
use crate::schedule::total_reading_days;
use crate::types::{Catalog, PlanConfig, PlanScope, ScheduleEntry, WeekdaySet};
use crate::Result;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render a day's reading range, e.g. "Genesis 1-4" or "Obadiah 1"
///
/// The label always uses the entry's starting book, even when the day's
/// allocation runs into the next book; persisted schedules have always been
/// labelled this way and downstream displays key off the starting book.
pub fn reading_range(entry: &ScheduleEntry) -> String {
    if entry.start_book == entry.end_book && entry.start_chapter == entry.end_chapter {
        format!("{} {}", entry.start_book, entry.start_chapter)
    } else {
        format!(
            "{} {}-{}",
            entry.start_book, entry.start_chapter, entry.end_chapter
        )
    }
}

/// Render a weekday set, e.g. "Mon-Fri", "Mon, Wed, Fri" or "every day"
pub fn weekday_names(set: WeekdaySet) -> String {
    if set.len() == 7 {
        return "every day".into();
    }

    let indices = set.indices();

    // Three or more consecutive days collapse to a range
    let consecutive = indices.len() > 1
        && indices
            .windows(2)
            .all(|pair| pair[1] == pair[0] + 1);

    if consecutive && indices.len() >= 3 {
        let first = DAY_NAMES[indices[0] as usize];
        let last = DAY_NAMES[indices[indices.len() - 1] as usize];
        return format!("{}-{}", first, last);
    }

    indices
        .iter()
        .map(|&i| DAY_NAMES[i as usize])
        .collect::<Vec<_>>()
        .join(", ")
}

fn scope_label(scope: &PlanScope) -> String {
    match scope {
        PlanScope::Full => "Whole Bible".into(),
        PlanScope::OldTestament => "Old Testament".into(),
        PlanScope::NewTestament => "New Testament".into(),
        PlanScope::Custom { books } => format!("{} books", books.len()),
    }
}

/// One-line summary of a plan configuration
///
/// e.g. "Whole Bible · 4 chapters/day · 5 days/week (Mon-Fri) · 298 reading days"
pub fn plan_summary(config: &PlanConfig, catalog: &Catalog) -> Result<String> {
    let books = resolve_scope(catalog, &config.scope)?;
    let total = total_reading_days(total_chapters(&books), config.chapters_per_day);

    let mut parts = vec![scope_label(&config.scope)];

    if config.chapters_per_day == 1 {
        parts.push("1 chapter/day".into());
    } else {
        parts.push(format!("{} chapters/day", config.chapters_per_day));
    }

    if config.reading_days.len() < 7 {
        parts.push(format!(
            "{} days/week ({})",
            config.reading_days.len(),
            weekday_names(config.reading_days)
        ));
    }

    parts.push(format!("{} reading days", total));

    Ok(parts.join(" · "))
}

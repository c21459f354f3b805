//! Date <-> reading-day-number mapping.
//!
//! A "day number" is the 1-based index of a calendar date among the dates
//! whose weekday is active, counted from the plan's start date. Inactive
//! (rest) days never receive a number, which is also why they can never
//! break a completion streak.

use crate::types::WeekdaySet;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// Day number of `target` relative to `start`
///
/// Counts the active-weekday dates in `[start, target]` inclusive.
/// Returns 0 when `target` is before `start`. If `target` itself falls on
/// a rest day, the result is the number of the last reading day before it.
pub fn day_number_for_date(start: NaiveDate, target: NaiveDate, weekdays: WeekdaySet) -> u32 {
    if target < start {
        return 0;
    }

    let mut day_number = 0;
    let mut current = start;
    while current <= target {
        if weekdays.contains(current.weekday()) {
            day_number += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    day_number
}

/// Calendar date of the `day_number`-th reading day
///
/// Inverse of [`day_number_for_date`] for every `day_number >= 1`:
/// `day_number_for_date(s, date_for_day_number(s, n, w)?, w) == n`.
pub fn date_for_day_number(
    start: NaiveDate,
    day_number: u32,
    weekdays: WeekdaySet,
) -> Result<NaiveDate> {
    if day_number < 1 {
        return Err(Error::DayOutOfRange(day_number));
    }
    if weekdays.is_empty() {
        return Err(Error::EmptyWeekdaySet);
    }

    let mut count = 0;
    let mut current = start;
    loop {
        if weekdays.contains(current.weekday()) {
            count += 1;
            if count == day_number {
                return Ok(current);
            }
        }
        current = current
            .succ_opt()
            .ok_or_else(|| Error::Other("calendar range exhausted".into()))?;
    }
}

/// Approximate elapsed calendar days for `total_reading_days` reading days
///
/// Full weeks times seven plus the leftover reading days. This is a display
/// figure only: for irregular weekday sets (say Mon/Wed/Fri) the remainder
/// days are not calendar-adjacent, so the true span from the start date to
/// the last reading date can differ. Use [`projected_end_date`] when the
/// actual calendar date matters.
pub fn calendar_span(total_reading_days: u32, active_days_per_week: u32) -> u32 {
    if active_days_per_week == 0 {
        return 0;
    }
    if active_days_per_week >= 7 {
        return total_reading_days;
    }

    let full_weeks = total_reading_days / active_days_per_week;
    let remainder = total_reading_days % active_days_per_week;
    full_weeks * 7 + remainder
}

/// Exact calendar date of the last reading day of a plan
pub fn projected_end_date(
    start: NaiveDate,
    total_reading_days: u32,
    weekdays: WeekdaySet,
) -> Result<NaiveDate> {
    date_for_day_number(start, total_reading_days, weekdays)
}

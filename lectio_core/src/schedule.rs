//! Deterministic schedule generation.
//!
//! The generator walks the resolved book list with a (book, chapter) cursor
//! and a calendar cursor, allocating a fixed number of chapters to every
//! active weekday until the scope is consumed. Output is fully determined
//! by its inputs; regenerating from the same plan config always yields the
//! same entries.

use crate::types::{Book, ScheduleEntry, WeekdaySet};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// Number of reading days needed to cover `total_chapters` at a given pace
pub fn total_reading_days(total_chapters: u32, chapters_per_day: u32) -> u32 {
    if chapters_per_day == 0 {
        return 0;
    }
    total_chapters.div_ceil(chapters_per_day)
}

/// Generate the complete schedule for a resolved scope
///
/// Every chapter of every book is covered exactly once, in order. The final
/// entry may cover fewer than `chapters_per_day` chapters. Day numbers are
/// 1-based and gapless; dates fall on active weekdays only and strictly
/// increase.
pub fn generate_schedule(
    books: &[Book],
    chapters_per_day: u32,
    weekdays: WeekdaySet,
    start_date: NaiveDate,
) -> Result<Vec<ScheduleEntry>> {
    if chapters_per_day < 1 {
        return Err(Error::InvalidPace(
            "chapters per day must be at least 1".into(),
        ));
    }
    if books.is_empty() {
        return Err(Error::InvalidPace("no books selected to schedule".into()));
    }
    if weekdays.is_empty() {
        return Err(Error::EmptyWeekdaySet);
    }

    let total: u32 = books.iter().map(|b| b.chapters).sum();
    let mut entries = Vec::with_capacity(total_reading_days(total, chapters_per_day) as usize);

    let mut book_index = 0;
    let mut chapter = 1;
    let mut day_number = 0;
    let mut date = start_date;

    while book_index < books.len() {
        // Rest day: move the calendar forward without allocating anything
        if !weekdays.contains(date.weekday()) {
            date = next_day(date)?;
            continue;
        }

        day_number += 1;
        let start_book = books[book_index].name.clone();
        let start_chapter = chapter;
        let mut end_book = start_book.clone();
        let mut end_chapter = start_chapter;

        // Consume chapters_per_day chapters, crossing book boundaries as
        // needed; the last day of the plan takes whatever remains.
        let mut remaining = chapters_per_day;
        while remaining > 0 && book_index < books.len() {
            let book = &books[book_index];
            let left_in_book = book.chapters - chapter + 1;

            if left_in_book <= remaining {
                end_book = book.name.clone();
                end_chapter = book.chapters;
                remaining -= left_in_book;
                book_index += 1;
                chapter = 1;
            } else {
                end_book = book.name.clone();
                end_chapter = chapter + remaining - 1;
                chapter = end_chapter + 1;
                remaining = 0;
            }
        }

        entries.push(ScheduleEntry {
            day_number,
            date,
            start_book,
            start_chapter,
            end_book,
            end_chapter,
        });

        date = next_day(date)?;
    }

    Ok(entries)
}

fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| Error::Other("calendar range exhausted".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::scope::{resolve_scope, total_chapters};
    use crate::types::PlanScope;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekdays(indices: &[u8]) -> WeekdaySet {
        WeekdaySet::from_indices(indices).unwrap()
    }

    fn genesis() -> Vec<Book> {
        vec![build_default_catalog().get("Genesis").unwrap().clone()]
    }

    #[test]
    fn test_genesis_at_four_chapters_weekdays_only() {
        // 50 chapters at 4/day, Mon-Fri, starting on a Monday
        let entries = generate_schedule(
            &genesis(),
            4,
            weekdays(&[1, 2, 3, 4, 5]),
            date(2024, 1, 1),
        )
        .unwrap();

        assert_eq!(entries.len(), 13);

        // Days 1-12 take four chapters each, day 13 takes the remainder
        for entry in &entries[..12] {
            assert_eq!(entry.end_chapter - entry.start_chapter + 1, 4);
        }
        let last = &entries[12];
        assert_eq!(last.start_chapter, 49);
        assert_eq!(last.end_chapter, 50);

        // Entry 5 is Friday; entry 6 skips the weekend to the next Monday
        assert_eq!(entries[4].date, date(2024, 1, 5));
        assert_eq!(entries[5].date, date(2024, 1, 8));
    }

    #[test]
    fn test_day_numbers_are_gapless() {
        let entries = generate_schedule(
            &genesis(),
            3,
            weekdays(&[1, 3, 5]),
            date(2024, 1, 1),
        )
        .unwrap();

        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.day_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_entry_count_formula() {
        let catalog = build_default_catalog();
        let books = resolve_scope(&catalog, &PlanScope::Full).unwrap();
        let total = total_chapters(&books);

        for pace in [1, 2, 3, 4, 5, 10] {
            let entries =
                generate_schedule(&books, pace, WeekdaySet::EVERY_DAY, date(2024, 1, 1)).unwrap();
            assert_eq!(entries.len() as u32, total.div_ceil(pace), "pace {pace}");
        }
    }

    #[test]
    fn test_dates_active_and_strictly_increasing() {
        let set = weekdays(&[2, 4, 6]);
        let entries = generate_schedule(&genesis(), 2, set, date(2024, 1, 1)).unwrap();

        let mut prev: Option<NaiveDate> = None;
        for entry in &entries {
            assert!(set.contains(entry.date.weekday()));
            if let Some(p) = prev {
                assert!(entry.date > p);
            }
            prev = Some(entry.date);
        }
    }

    #[test]
    fn test_every_chapter_covered_exactly_once() {
        let catalog = build_default_catalog();
        let scope = PlanScope::Custom {
            books: vec![
                "Obadiah".into(),
                "Jonah".into(),
                "Micah".into(),
                "Nahum".into(),
            ],
        };
        let books = resolve_scope(&catalog, &scope).unwrap();

        let entries =
            generate_schedule(&books, 3, WeekdaySet::EVERY_DAY, date(2024, 1, 1)).unwrap();

        // Flatten the scope into (book, chapter) pairs and replay each
        // entry's range against it.
        let flat: Vec<(String, u32)> = books
            .iter()
            .flat_map(|b| (1..=b.chapters).map(|c| (b.name.clone(), c)))
            .collect();

        let mut pos = 0;
        for entry in &entries {
            assert_eq!(flat[pos], (entry.start_book.clone(), entry.start_chapter));
            while flat[pos] != (entry.end_book.clone(), entry.end_chapter) {
                pos += 1;
            }
            pos += 1;
        }
        assert_eq!(pos, flat.len());
    }

    #[test]
    fn test_day_spanning_a_book_boundary() {
        let catalog = build_default_catalog();
        let scope = PlanScope::Custom {
            books: vec!["Obadiah".into(), "Jonah".into()],
        };
        let books = resolve_scope(&catalog, &scope).unwrap();

        // Obadiah has 1 chapter, so a 3-chapter day runs into Jonah
        let entries =
            generate_schedule(&books, 3, WeekdaySet::EVERY_DAY, date(2024, 1, 1)).unwrap();

        assert_eq!(entries.len(), 2);
        let first = &entries[0];
        assert_eq!(first.start_book, "Obadiah");
        assert_eq!(first.start_chapter, 1);
        assert_eq!(first.end_book, "Jonah");
        assert_eq!(first.end_chapter, 2);

        let second = &entries[1];
        assert_eq!(second.start_book, "Jonah");
        assert_eq!(second.start_chapter, 3);
        assert_eq!(second.end_book, "Jonah");
        assert_eq!(second.end_chapter, 4);
    }

    #[test]
    fn test_zero_pace_is_invalid() {
        let result = generate_schedule(&genesis(), 0, WeekdaySet::EVERY_DAY, date(2024, 1, 1));
        assert!(matches!(result, Err(Error::InvalidPace(_))));
    }

    #[test]
    fn test_empty_book_list_is_invalid() {
        let result = generate_schedule(&[], 1, WeekdaySet::EVERY_DAY, date(2024, 1, 1));
        assert!(matches!(result, Err(Error::InvalidPace(_))));
    }

    #[test]
    fn test_empty_weekday_set_is_invalid() {
        let result = generate_schedule(&genesis(), 1, WeekdaySet::empty(), date(2024, 1, 1));
        assert!(matches!(result, Err(Error::EmptyWeekdaySet)));
    }

    #[test]
    fn test_inactive_start_date_defers_first_entry() {
        // Saturday start with Mon-Fri reading: first entry lands on Monday
        let entries = generate_schedule(
            &genesis(),
            5,
            weekdays(&[1, 2, 3, 4, 5]),
            date(2024, 1, 6),
        )
        .unwrap();

        assert_eq!(entries[0].day_number, 1);
        assert_eq!(entries[0].date, date(2024, 1, 8));
    }
}

//! Core domain types for the Lectio reading plan system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Books (sections of the corpus) and the catalog holding them
//! - Scope selectors and plan configuration
//! - Schedule entries produced by the generator
//! - Progress and streak snapshots

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Catalog Types
// ============================================================================

/// Which half of the canon a book belongs to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
}

/// A single book of the corpus, the unit of scope selection
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    pub abbr: String,
    pub testament: Testament,
    pub chapters: u32,
}

/// The ordered catalog of books
///
/// Canonical order is positional: iteration order of `books` is the order
/// readings are generated in, and the order explicit selections are
/// normalized back to.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub books: Vec<Book>,
}

// ============================================================================
// Plan Configuration Types
// ============================================================================

/// Which part of the catalog a plan covers
///
/// A custom selection carries its book list in the variant itself, so a
/// "custom scope with no books" cannot be represented and checked for at
/// runtime in half a dozen places.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanScope {
    Full,
    OldTestament,
    NewTestament,
    Custom { books: Vec<String> },
}

/// Set of weekdays on which reading happens
///
/// Stored as a bitmask; serialized as the 0-6 index list used by plan
/// configuration (0 = Sunday), so `[1, 2, 3, 4, 5]` reads Monday-Friday.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// All seven weekdays
    pub const EVERY_DAY: WeekdaySet = WeekdaySet(0b0111_1111);

    /// The empty set; rejected by every scheduling entry point
    pub fn empty() -> Self {
        WeekdaySet(0)
    }

    /// Build a set from chrono weekdays
    pub fn from_weekdays(days: &[Weekday]) -> Self {
        let mut set = Self::empty();
        for day in days {
            set.insert(*day);
        }
        set
    }

    /// Build a set from 0-6 indices (0 = Sunday)
    pub fn from_indices(indices: &[u8]) -> crate::Result<Self> {
        let mut set = Self::empty();
        for &idx in indices {
            if idx > 6 {
                return Err(crate::Error::Config(format!(
                    "weekday index {} is out of range 0-6",
                    idx
                )));
            }
            set.0 |= 1 << idx;
        }
        Ok(set)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_sunday();
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_sunday()) != 0
    }

    /// Number of active weekdays per week
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Active 0-6 indices in ascending order (0 = Sunday)
    pub fn indices(self) -> Vec<u8> {
        (0..7u8).filter(|i| self.0 & (1 << i) != 0).collect()
    }

    /// Active weekdays in Sunday-first order
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        self.indices().into_iter().map(|i| match i {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        })
    }
}

impl std::fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WeekdaySet").field(&self.indices()).finish()
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = crate::Error;

    fn try_from(indices: Vec<u8>) -> crate::Result<Self> {
        Self::from_indices(&indices)
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Vec<u8> {
        set.indices()
    }
}

/// Everything needed to generate a schedule
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanConfig {
    pub scope: PlanScope,
    pub chapters_per_day: u32,
    pub reading_days: WeekdaySet,
    pub start_date: NaiveDate,
}

impl PlanConfig {
    /// Check the local invariants before any schedule computation starts
    pub fn validate(&self) -> crate::Result<()> {
        if self.chapters_per_day < 1 {
            return Err(crate::Error::InvalidPace(
                "chapters per day must be at least 1".into(),
            ));
        }
        if self.reading_days.is_empty() {
            return Err(crate::Error::EmptyWeekdaySet);
        }
        if let PlanScope::Custom { books } = &self.scope {
            if books.is_empty() {
                return Err(crate::Error::InvalidScope(
                    "custom scope selects no books".into(),
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Schedule Types
// ============================================================================

/// One reading day of a generated schedule
///
/// `day_number` is 1-based, gapless and strictly increasing; `date` always
/// falls on an active weekday. A day whose allocation spills over a book
/// boundary records the later book in `end_book` but is labelled by
/// `start_book` downstream.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day_number: u32,
    pub date: NaiveDate,
    pub start_book: String,
    pub start_chapter: u32,
    pub end_book: String,
    pub end_chapter: u32,
}

// ============================================================================
// Completion Tracking Types
// ============================================================================

/// Day numbers the user has marked complete
///
/// Externally owned; the core only reads snapshots of it.
pub type CompletionSet = BTreeSet<u32>;

/// Derived progress state, recomputed per query
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub completed: u32,
    pub total: u32,
    pub percentage: u8,
    pub current_day_number: u32,
}

/// Derived streak state, recomputed per query
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakSnapshot {
    pub current_streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_set_from_indices() {
        let set = WeekdaySet::from_indices(&[1, 2, 3, 4, 5]).unwrap();
        assert!(set.contains(Weekday::Mon));
        assert!(set.contains(Weekday::Fri));
        assert!(!set.contains(Weekday::Sat));
        assert!(!set.contains(Weekday::Sun));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_weekday_set_rejects_bad_index() {
        assert!(WeekdaySet::from_indices(&[7]).is_err());
    }

    #[test]
    fn test_weekday_set_indices_roundtrip() {
        let indices = vec![0u8, 3, 6];
        let set = WeekdaySet::from_indices(&indices).unwrap();
        assert_eq!(set.indices(), indices);
    }

    #[test]
    fn test_weekday_set_from_weekdays() {
        let set = WeekdaySet::from_weekdays(&[Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        assert_eq!(set, WeekdaySet::from_indices(&[1, 3, 5]).unwrap());

        let collected: Vec<Weekday> = set.iter().collect();
        assert_eq!(collected, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    }

    #[test]
    fn test_weekday_set_serde_as_index_list() {
        let set = WeekdaySet::from_indices(&[1, 3, 5]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[1,3,5]");

        let parsed: WeekdaySet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_every_day_has_seven_days() {
        assert_eq!(WeekdaySet::EVERY_DAY.len(), 7);
        assert_eq!(WeekdaySet::EVERY_DAY.indices(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_plan_config_validate() {
        let config = PlanConfig {
            scope: PlanScope::Full,
            chapters_per_day: 0,
            reading_days: WeekdaySet::EVERY_DAY,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(matches!(
            config.validate(),
            Err(crate::Error::InvalidPace(_))
        ));

        let config = PlanConfig {
            chapters_per_day: 1,
            reading_days: WeekdaySet::empty(),
            ..config
        };
        assert!(matches!(
            config.validate(),
            Err(crate::Error::EmptyWeekdaySet)
        ));

        let config = PlanConfig {
            scope: PlanScope::Custom { books: vec![] },
            reading_days: WeekdaySet::EVERY_DAY,
            ..config
        };
        assert!(matches!(
            config.validate(),
            Err(crate::Error::InvalidScope(_))
        ));
    }

    #[test]
    fn test_plan_scope_serde_tagging() {
        let scope = PlanScope::Custom {
            books: vec!["Genesis".into(), "Exodus".into()],
        };
        let json = serde_json::to_string(&scope).unwrap();
        let parsed: PlanScope = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scope);

        let full: PlanScope = serde_json::from_str(r#"{"type":"full"}"#).unwrap();
        assert_eq!(full, PlanScope::Full);
    }
}

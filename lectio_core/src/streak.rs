//! Consecutive-completion streaks.
//!
//! Streaks are counted over logical day numbers, not calendar dates: rest
//! days never receive a day number, so they cannot break a streak.

use crate::types::{CompletionSet, StreakSnapshot};

/// Current streak ending at (or just before) the current day
///
/// The walk anchors on the current day if it has been completed, otherwise
/// on the day before it; a reading the user simply hasn't gotten to yet
/// today does not break a streak earned through yesterday. From the anchor
/// it counts consecutive completed day numbers downward and stops at the
/// first gap.
pub fn current_streak(current_day_number: u32, completed_days: &CompletionSet) -> StreakSnapshot {
    if current_day_number == 0 {
        return StreakSnapshot { current_streak: 0 };
    }

    let mut day = if completed_days.contains(&current_day_number) {
        current_day_number
    } else {
        current_day_number - 1
    };

    let mut streak = 0;
    while day >= 1 && completed_days.contains(&day) {
        streak += 1;
        day -= 1;
    }

    StreakSnapshot {
        current_streak: streak,
    }
}

/// Longest consecutive run anywhere in the completion set
pub fn longest_streak(completed_days: &CompletionSet) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev = None;

    for &day in completed_days {
        run = match prev {
            Some(p) if day == p + 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    longest
}

/// Display tier for a streak count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreakLevel {
    pub level: u8,
    pub label: &'static str,
}

/// Map a streak count to its display tier
pub fn streak_level(streak: u32) -> StreakLevel {
    let (level, label) = match streak {
        100.. => (5, "legend"),
        30..=99 => (4, "master"),
        14..=29 => (3, "on fire"),
        7..=13 => (2, "steady"),
        3..=6 => (1, "getting started"),
        _ => (0, ""),
    };
    StreakLevel { level, label }
}

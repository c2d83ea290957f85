//! Streak statistics derived from completion dates.
//!
//! `recompute` is the source of truth: a pure function of the problem
//! records, the previously known longest streak, and "today". `Stats::advance`
//! is the incremental shortcut used when a new completion is appended; it must
//! always agree with a full recomputation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::day_gap;
use crate::problem::Problem;

/// Derived streak statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stats {
    /// Consecutive days ending at the last completion; 0 once lapsed
    pub current_streak: u32,

    /// Best streak ever seen; never decreases
    pub longest_streak: u32,

    pub total_completed: u32,

    #[serde(
        default,
        with = "crate::calendar::serde_day",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_completed_date: Option<NaiveDate>,
}

impl Stats {
    /// Stats with only the longest-streak floor carried over.
    pub fn with_longest(longest_streak: u32) -> Self {
        Self {
            longest_streak,
            ..Self::default()
        }
    }

    /// Apply one new completion on `today` without rescanning history.
    ///
    /// Returns `None` when the cached values cannot be extended: `today`
    /// precedes the last completion, or the streak was already zeroed by a
    /// lapse check against some other day. The caller must fall back to
    /// [`recompute`].
    pub fn advance(&self, today: NaiveDate) -> Option<Stats> {
        let current_streak = match self.last_completed_date {
            None => 1,
            Some(last) => {
                let gap = day_gap(today, last);
                if gap < 0 || self.current_streak == 0 {
                    return None;
                }
                match gap {
                    0 => self.current_streak,
                    1 => self.current_streak + 1,
                    _ => 1,
                }
            }
        };

        Some(Stats {
            current_streak,
            longest_streak: self.longest_streak.max(current_streak),
            total_completed: self.total_completed + 1,
            last_completed_date: Some(today),
        })
    }

    /// Whether the last completion is more than a day older than `today`.
    pub fn is_lapsed(&self, today: NaiveDate) -> bool {
        self.last_completed_date
            .is_some_and(|last| day_gap(today, last) > 1)
    }

    /// Whether the streak survives only if something is completed today.
    pub fn streak_at_risk(&self, today: NaiveDate) -> bool {
        self.current_streak > 0
            && self
                .last_completed_date
                .is_some_and(|last| day_gap(today, last) == 1)
    }
}

/// Derive stats from the full problem collection.
///
/// Only completed problems that carry a completion date take part; undated
/// completions are treated as missing. Same-day completions neither extend
/// nor reset the running streak.
pub fn recompute<'a, I>(problems: I, previous_longest: u32, today: NaiveDate) -> Stats
where
    I: IntoIterator<Item = &'a Problem>,
{
    let mut days: Vec<NaiveDate> = problems
        .into_iter()
        .filter(|problem| problem.completed)
        .filter_map(|problem| problem.completed_date)
        .collect();
    days.sort_unstable();

    let Some(&last) = days.last() else {
        return Stats::with_longest(previous_longest);
    };

    let mut running: u32 = 1;
    let mut best: u32 = 1;
    for pair in days.windows(2) {
        match day_gap(pair[1], pair[0]) {
            0 => {}
            1 => running += 1,
            _ => running = 1,
        }
        best = best.max(running);
    }

    let lapsed = day_gap(today, last) > 1;
    let current_streak = if lapsed { 0 } else { running };

    debug!(
        completions = days.len(),
        running, best, lapsed, "recomputed streak stats"
    );

    Stats {
        current_streak,
        longest_streak: previous_longest.max(best),
        total_completed: saturating_count(days.len()),
        last_completed_date: Some(last),
    }
}

fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

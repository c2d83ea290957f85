//! Tracker snapshot load/save over a key-value store.
//!
//! Persisted problems are read leniently: a completion without a usable date
//! is reopened, unknown platform names are re-derived from the url, duplicate ids keep the
//! first record. The strict shape checks live in `bundle` for imports.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::{parse_day, Clock};
use crate::error::Result;
use crate::problem::{Platform, Problem};
use crate::storage::{keys, load, save, KeyValueStore};
use crate::streak::Stats;
use crate::tracker::Tracker;

/// Presentation preferences persisted alongside the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub dark_mode: bool,
}

/// On-disk problem record, before repair.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProblem {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    completed_date: Option<String>,
}

impl StoredProblem {
    fn repair(self) -> Problem {
        let platform = self
            .platform
            .as_deref()
            .and_then(Platform::from_name)
            .unwrap_or_else(|| Platform::classify(&self.url));

        let parsed = self.completed_date.as_deref().and_then(parse_day);
        let completed = self.completed && parsed.is_some();
        if self.completed && !completed {
            warn!(
                id = %self.id,
                raw = ?self.completed_date,
                "completion date missing or malformed; reopening problem"
            );
        }

        Problem {
            id: self.id,
            title: self.title,
            url: self.url,
            platform,
            completed,
            completed_date: if completed { parsed } else { None },
        }
    }
}

fn load_problems<S>(store: &S) -> Vec<Problem>
where
    S: KeyValueStore + ?Sized,
{
    let stored: Vec<StoredProblem> = load(store, keys::PROBLEMS);
    let mut seen = HashSet::new();
    stored
        .into_iter()
        .filter(|record| {
            let fresh = !record.id.trim().is_empty() && seen.insert(record.id.clone());
            if !fresh {
                warn!(id = %record.id, "dropping persisted problem with empty or duplicate id");
            }
            fresh
        })
        .map(StoredProblem::repair)
        .collect()
}

/// Restore a tracker from `store`.
///
/// Never fails: anything unreadable starts empty, and stats are recomputed
/// from the problems with only the persisted longest streak kept as a floor.
pub fn load_tracker<S, C>(store: &S, clock: C) -> Tracker<C>
where
    S: KeyValueStore + ?Sized,
    C: Clock + Clone,
{
    let problems = load_problems(store);
    let persisted: Stats = load(store, keys::STATS);
    let count = problems.len();

    match Tracker::from_parts(problems, persisted, clock.clone()) {
        Ok(tracker) => {
            debug!(problems = count, "restored tracker");
            tracker
        }
        Err(err) => {
            warn!(error = %err, "persisted problems rejected; starting empty");
            Tracker::with_longest_floor(clock, persisted.longest_streak)
        }
    }
}

/// Persist the tracker's problems and stats.
///
/// # Errors
///
/// Returns `GrindError::Storage` if either write fails. In-memory state is
/// unaffected either way.
pub fn save_tracker<S, C>(store: &mut S, tracker: &Tracker<C>) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    C: Clock,
{
    save(store, keys::PROBLEMS, &tracker.store().to_vec())?;
    save(store, keys::STATS, tracker.stats())
}

pub fn load_settings<S>(store: &S) -> Settings
where
    S: KeyValueStore + ?Sized,
{
    load(store, keys::SETTINGS)
}

pub fn save_settings<S>(store: &mut S, settings: &Settings) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    save(store, keys::SETTINGS, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::Bundle;
    use crate::calendar::FixedClock;
    use crate::problem::NewProblem;
    use crate::storage::MemoryStore;
    use crate::tracker::MarkOutcome;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap())
    }

    #[test]
    fn test_empty_store_gives_empty_tracker() {
        let tracker = load_tracker(&MemoryStore::new(), clock());
        assert!(tracker.store().is_empty());
        assert_eq!(*tracker.stats(), Stats::default());
    }

    #[test]
    fn test_corrupt_problems_fall_back_to_empty() {
        let mut store = MemoryStore::new();
        store.insert_raw(keys::PROBLEMS, "[{\"id\": ");
        store.insert_raw(keys::STATS, "{\"longestStreak\": \"many\"}");

        let tracker = load_tracker(&store, clock());
        assert!(tracker.store().is_empty());
        assert_eq!(*tracker.stats(), Stats::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut tracker = Tracker::new(clock());
        let id = tracker.add(NewProblem::new("a"));
        tracker.add(NewProblem::new("b"));
        tracker.mark_complete(&id).unwrap();

        let mut store = MemoryStore::new();
        save_tracker(&mut store, &tracker).unwrap();
        let restored = load_tracker(&store, clock());

        assert_eq!(restored.store().to_vec(), tracker.store().to_vec());
        assert_eq!(restored.stats(), tracker.stats());
    }

    #[test]
    fn test_malformed_date_reopens_problem() {
        let mut store = MemoryStore::new();
        store.insert_raw(
            keys::PROBLEMS,
            r#"[
                {"id": "a", "title": "ok", "url": "", "platform": "LeetCode",
                 "completed": true, "completedDate": "2024-09-01T10:00:00Z"},
                {"id": "b", "title": "bad", "url": "https://codeforces.com/x",
                 "platform": "Nope", "completed": true, "completedDate": "not a date"},
                {"id": "c", "title": "undated", "completed": true}
            ]"#,
        );

        let tracker = load_tracker(&store, clock());
        for id in ["b", "c"] {
            let problem = tracker.store().get(id).unwrap();
            assert!(!problem.completed);
            assert_eq!(problem.completed_date, None);
        }
        assert_eq!(tracker.store().get("b").unwrap().platform, Platform::Codeforces);
        assert!(tracker.store().iter().all(Problem::is_consistent));
        assert_eq!(tracker.stats().total_completed, 1);
        assert_eq!(
            tracker.stats().total_completed as usize,
            tracker.store().completed_count()
        );
        assert_eq!(tracker.store().progress().completed, 1);
    }

    #[test]
    fn test_reopened_problem_can_be_completed_and_exported() {
        let mut store = MemoryStore::new();
        store.insert_raw(
            keys::PROBLEMS,
            r#"[{"id": "a", "title": "t", "completed": true, "completedDate": "garbage"}]"#,
        );

        let mut tracker = load_tracker(&store, clock());
        assert_eq!(tracker.mark_complete("a").unwrap(), MarkOutcome::Changed);
        assert_eq!(tracker.stats().total_completed, 1);
        assert_eq!(
            tracker.store().get("a").unwrap().completed_date,
            Some(clock().today())
        );

        let json = tracker.export(false).to_json().unwrap();
        let bundle = Bundle::from_json(&json).unwrap();
        assert_eq!(bundle.problems, tracker.store().to_vec());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut store = MemoryStore::new();
        store.insert_raw(
            keys::PROBLEMS,
            r#"[{"id": "a", "title": "first"}, {"id": "a", "title": "second"}]"#,
        );
        let tracker = load_tracker(&store, clock());
        assert_eq!(tracker.store().len(), 1);
        assert_eq!(tracker.store().get("a").unwrap().title, "first");
    }

    #[test]
    fn test_persisted_longest_is_kept_as_floor() {
        let mut store = MemoryStore::new();
        save(&mut store, keys::STATS, &Stats::with_longest(21)).unwrap();
        let tracker = load_tracker(&store, clock());
        assert_eq!(tracker.stats().longest_streak, 21);
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let mut tracker = Tracker::new(clock());
        let id = tracker.add(NewProblem::new("a"));
        tracker.mark_complete(&id).unwrap();
        let before = *tracker.stats();

        let mut store = MemoryStore::with_quota(8);
        assert!(save_tracker(&mut store, &tracker).is_err());
        assert_eq!(*tracker.stats(), before);
        assert!(tracker.store().get(&id).unwrap().completed);
    }

    #[test]
    fn test_settings_default_and_round_trip() {
        let mut store = MemoryStore::new();
        assert!(!load_settings(&store).dark_mode);
        save_settings(&mut store, &Settings { dark_mode: true }).unwrap();
        assert!(load_settings(&store).dark_mode);
    }
}

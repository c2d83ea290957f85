//! Tracker state container.
//!
//! Owns the problem queue, the cached `Stats` and the clock. Every mutation
//! of completion state goes through here and leaves `stats` equal to what a
//! full recomputation of the queue would produce.

use tracing::{debug, info};

use crate::bundle::Bundle;
use crate::calendar::{Clock, SystemClock};
use crate::error::{GrindError, Result};
use crate::problem::{NewProblem, Problem};
use crate::store::ProblemStore;
use crate::streak::{self, Stats};

/// Result of a completion toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The problem's completion state changed
    Changed,
    /// The problem was already in the requested state
    Unchanged,
}

/// Problem queue plus derived streak statistics.
#[derive(Debug, Clone)]
pub struct Tracker<C: Clock = SystemClock> {
    store: ProblemStore,
    stats: Stats,
    clock: C,
}

impl<C: Clock> Tracker<C> {
    /// Empty tracker with zeroed stats.
    pub fn new(clock: C) -> Self {
        Self::with_longest_floor(clock, 0)
    }

    /// Empty tracker that remembers a longest streak from earlier history.
    pub fn with_longest_floor(clock: C, longest_streak: u32) -> Self {
        Self {
            store: ProblemStore::new(),
            stats: Stats::with_longest(longest_streak),
            clock,
        }
    }

    /// Rebuild a tracker from persisted parts.
    ///
    /// Only `longest_streak` is taken from `persisted`; everything else is
    /// recomputed from the records.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::Validation` if the records contain duplicate ids.
    pub fn from_parts(problems: Vec<Problem>, persisted: Stats, clock: C) -> Result<Self> {
        let store = ProblemStore::from_problems(problems)?;
        let stats = streak::recompute(store.iter(), persisted.longest_streak, clock.today());
        Ok(Self {
            store,
            stats,
            clock,
        })
    }

    pub fn store(&self) -> &ProblemStore {
        &self.store
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Append a problem to the queue, returning its id.
    pub fn add(&mut self, new_problem: NewProblem) -> String {
        self.store.add(new_problem)
    }

    /// Append several problems in order.
    pub fn add_many(&mut self, new_problems: Vec<NewProblem>) -> Vec<String> {
        new_problems
            .into_iter()
            .map(|new_problem| self.store.add(new_problem))
            .collect()
    }

    /// Mark a problem completed today.
    ///
    /// Already-completed problems keep their original date and are not
    /// counted twice.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::NotFound` if no problem has this id.
    pub fn mark_complete(&mut self, id: &str) -> Result<MarkOutcome> {
        let today = self.clock.today();
        let problem = self
            .store
            .get_mut(id)
            .ok_or_else(|| GrindError::NotFound(format!("problem {}", id)))?;

        if problem.completed {
            debug!(id, "problem already completed");
            return Ok(MarkOutcome::Unchanged);
        }
        problem.set_completed(today);

        match self.stats.advance(today) {
            Some(next) => {
                debug_assert_eq!(
                    next,
                    streak::recompute(self.store.iter(), self.stats.longest_streak, today),
                    "incremental stats diverged from recomputation"
                );
                self.stats = next;
            }
            None => {
                debug!(id, "completion precedes last recorded day; recomputing");
                self.recompute();
            }
        }
        Ok(MarkOutcome::Changed)
    }

    /// Clear a problem's completion and rebuild stats from the queue.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::NotFound` if no problem has this id.
    pub fn mark_incomplete(&mut self, id: &str) -> Result<MarkOutcome> {
        let problem = self
            .store
            .get_mut(id)
            .ok_or_else(|| GrindError::NotFound(format!("problem {}", id)))?;

        if !problem.completed && problem.completed_date.is_none() {
            return Ok(MarkOutcome::Unchanged);
        }
        problem.clear_completed();
        self.recompute();
        Ok(MarkOutcome::Changed)
    }

    /// Recompute stats against the current day, keeping the longest-streak floor.
    pub fn recompute(&mut self) -> &Stats {
        self.stats = streak::recompute(
            self.store.iter(),
            self.stats.longest_streak,
            self.clock.today(),
        );
        &self.stats
    }

    /// Replace the queue wholesale with a bundle's problems.
    ///
    /// The longest streak keeps the larger of the current value and the
    /// bundle's. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::MalformedImport` if the bundle's records do not
    /// form a valid queue.
    pub fn import(&mut self, bundle: Bundle) -> Result<()> {
        bundle.validate()?;
        let floor = self.stats.longest_streak.max(bundle.stats.longest_streak);
        let count = bundle.problems.len();
        self.store
            .replace_all(bundle.problems)
            .map_err(|e| GrindError::MalformedImport(e.to_string()))?;
        self.stats = Stats::with_longest(floor);
        self.recompute();
        info!(problems = count, "imported problem bundle");
        Ok(())
    }

    /// Snapshot the current state as a bundle.
    pub fn export(&self, dark_mode: bool) -> Bundle {
        Bundle {
            problems: self.store.to_vec(),
            stats: self.stats,
            dark_mode,
        }
    }
}

impl Default for Tracker<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

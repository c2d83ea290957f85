//! Insertion-ordered problem queue.
//!
//! The store owns every `Problem`. Insertion order is meaningful: it defines
//! which problem is "next".

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{GrindError, Result};
use crate::problem::{NewProblem, Problem};

/// Ordered collection of problems keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemStore {
    problems: IndexMap<String, Problem>,
}

/// Queue completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// Whole percent, rounded down; 0 for an empty queue
    pub percent: u8,
}

impl ProblemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, rejecting duplicate ids.
    pub fn from_problems(problems: Vec<Problem>) -> Result<Self> {
        let mut store = Self::new();
        for problem in problems {
            store.insert(problem)?;
        }
        Ok(store)
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::Validation` if the id is empty or already present.
    pub fn insert(&mut self, problem: Problem) -> Result<()> {
        if problem.id.trim().is_empty() {
            return Err(GrindError::Validation("Problem id is empty".to_string()));
        }
        if self.problems.contains_key(&problem.id) {
            return Err(GrindError::Validation(format!(
                "Duplicate problem id: {}",
                problem.id
            )));
        }
        self.problems.insert(problem.id.clone(), problem);
        Ok(())
    }

    /// Create and append a problem, returning its id.
    pub fn add(&mut self, new_problem: NewProblem) -> String {
        let problem = new_problem.build();
        let id = problem.id.clone();
        self.problems.insert(id.clone(), problem);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Problem> {
        self.problems.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Problem> {
        self.problems.get_mut(id)
    }

    /// Problems in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.values()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// First problem in insertion order that is not completed.
    pub fn next_incomplete(&self) -> Option<&Problem> {
        self.iter().find(|problem| !problem.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.iter().filter(|problem| problem.completed).count()
    }

    /// Find the unique problem whose id equals or starts with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::NotFound` if nothing matches and
    /// `GrindError::InvalidInput` if the prefix is empty or ambiguous.
    pub fn resolve(&self, prefix: &str) -> Result<&Problem> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(GrindError::InvalidInput("Problem id is empty".to_string()));
        }
        if let Some(problem) = self.problems.get(prefix) {
            return Ok(problem);
        }

        let mut matches = self.iter().filter(|problem| problem.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(problem), None) => Ok(problem),
            (Some(_), Some(_)) => Err(GrindError::InvalidInput(format!(
                "Problem id prefix '{}' is ambiguous",
                prefix
            ))),
            (None, _) => Err(GrindError::NotFound(format!("problem {}", prefix))),
        }
    }

    /// Replace the contents wholesale. Duplicate ids reject the whole batch.
    pub fn replace_all(&mut self, problems: Vec<Problem>) -> Result<()> {
        *self = Self::from_problems(problems)?;
        Ok(())
    }

    pub fn progress(&self) -> Progress {
        let total = self.len();
        let completed = self.completed_count();
        let percent = if total == 0 {
            0
        } else {
            (completed * 100 / total) as u8
        };
        Progress {
            completed,
            total,
            percent,
        }
    }

    /// Owned copy of the records in insertion order.
    pub fn to_vec(&self) -> Vec<Problem> {
        self.iter().cloned().collect()
    }
}

//! Import/export bundle format.
//!
//! A bundle is the portable JSON form of the whole tracker:
//! `{"problems": [...], "stats": {...}, "darkMode": bool}`. Parsing is strict:
//! unknown or missing fields reject the whole payload.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{GrindError, Result};
use crate::problem::Problem;
use crate::streak::Stats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Bundle {
    pub problems: Vec<Problem>,
    pub stats: Stats,
    pub dark_mode: bool,
}

impl Bundle {
    /// Parse and validate a bundle.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::MalformedImport` if the JSON does not match the
    /// bundle shape or the records are inconsistent.
    pub fn from_json(raw: &str) -> Result<Self> {
        let bundle: Bundle =
            serde_json::from_str(raw).map_err(|e| GrindError::MalformedImport(e.to_string()))?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GrindError::Storage(e.to_string()))
    }

    /// Check record-level rules serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::MalformedImport` on empty or duplicate ids, or
    /// a completion flag without a date (or the reverse).
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, problem) in self.problems.iter().enumerate() {
            if problem.id.trim().is_empty() {
                return Err(GrindError::MalformedImport(format!(
                    "problem at index {} has an empty id",
                    index
                )));
            }
            if !seen.insert(problem.id.as_str()) {
                return Err(GrindError::MalformedImport(format!(
                    "duplicate problem id: {}",
                    problem.id
                )));
            }
            if !problem.is_consistent() {
                return Err(GrindError::MalformedImport(format!(
                    "problem {} has completed={} but {} completion date",
                    problem.id,
                    problem.completed,
                    if problem.completed_date.is_some() {
                        "a"
                    } else {
                        "no"
                    }
                )));
            }
        }
        Ok(())
    }
}

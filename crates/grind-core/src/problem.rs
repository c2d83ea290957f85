//! Problem records and platform classification.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Judge a problem is hosted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Platform {
    LeetCode,
    Codeforces,
    CodeChef,
    HackerRank,
    #[default]
    Unknown,
}

impl Platform {
    /// Known platforms and the domain fragment that identifies each.
    const DOMAINS: [(&'static str, Platform); 4] = [
        ("leetcode", Platform::LeetCode),
        ("codeforces", Platform::Codeforces),
        ("codechef", Platform::CodeChef),
        ("hackerrank", Platform::HackerRank),
    ];

    /// Classify a URL by substring match against known domains.
    ///
    /// Total: anything unrecognized (including an empty string) is `Unknown`.
    pub fn classify(url: &str) -> Self {
        let lowered = url.to_ascii_lowercase();
        Self::DOMAINS
            .iter()
            .find(|(needle, _)| lowered.contains(needle))
            .map(|(_, platform)| *platform)
            .unwrap_or(Platform::Unknown)
    }

    /// Look up a platform by its display name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Platform::LeetCode,
            Platform::Codeforces,
            Platform::CodeChef,
            Platform::HackerRank,
            Platform::Unknown,
        ]
        .into_iter()
        .find(|platform| platform.as_str().eq_ignore_ascii_case(name.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LeetCode => "LeetCode",
            Platform::Codeforces => "Codeforces",
            Platform::CodeChef => "CodeChef",
            Platform::HackerRank => "HackerRank",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A practice problem in the queue.
///
/// `completed_date` is present iff `completed` is true. The recorder keeps
/// that pairing; the streak engine tolerates records that violate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Problem {
    /// Opaque identifier, assigned at creation
    pub id: String,

    pub title: String,

    /// Source link (may be empty)
    pub url: String,

    pub platform: Platform,

    pub completed: bool,

    /// Calendar day the problem was completed
    #[serde(
        default,
        with = "crate::calendar::serde_day",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_date: Option<NaiveDate>,
}

impl Problem {
    /// Whether the completion flag and date agree.
    pub fn is_consistent(&self) -> bool {
        self.completed == self.completed_date.is_some()
    }

    pub(crate) fn set_completed(&mut self, day: NaiveDate) {
        self.completed = true;
        self.completed_date = Some(day);
    }

    pub(crate) fn clear_completed(&mut self) {
        self.completed = false;
        self.completed_date = None;
    }
}

/// Builder for creating new problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProblem {
    pub title: String,
    pub url: String,
}

impl NewProblem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: String::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Build the record: fresh id, platform classified from the url, incomplete.
    pub fn build(self) -> Problem {
        let platform = Platform::classify(&self.url);
        Problem {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            url: self.url,
            platform,
            completed: false,
            completed_date: None,
        }
    }
}

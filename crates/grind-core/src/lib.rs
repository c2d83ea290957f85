//! # Grind Core
//!
//! Core library for Grind - a CLI-first tracker for a daily coding-practice habit.
//!
//! This crate provides the domain logic, persistence abstractions, and data models
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **problem**: Problem records and platform classification
//! - **store**: Insertion-ordered problem queue
//! - **streak**: Streak statistics derived from completion dates
//! - **tracker**: State container tying the queue, cached stats and clock together
//! - **parser**: Free-text to problem conversion
//! - **bundle**: Import/export bundle format
//! - **storage**: Key-value persistence trait and backends

pub mod bundle;
pub mod calendar;
pub mod error;
pub mod fs;
pub mod parser;
pub mod problem;
pub mod storage;
pub mod store;
pub mod streak;
pub mod tracker;

pub use bundle::Bundle;
pub use calendar::{Clock, FixedClock, SystemClock};
pub use error::{GrindError, Result};
pub use problem::{NewProblem, Platform, Problem};
pub use storage::KeyValueStore;
pub use store::{ProblemStore, Progress};
pub use streak::Stats;
pub use tracker::{MarkOutcome, Tracker};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

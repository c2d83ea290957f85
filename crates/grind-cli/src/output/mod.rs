//! Output formatting helpers for the CLI.

mod json;
mod text;

pub use json::{problem_json, problems_json, stats_json};
pub use text::{last_completed, problem_row, streak_status, streak_summary, PROBLEM_COLUMNS};

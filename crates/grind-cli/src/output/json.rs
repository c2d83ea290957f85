//! JSON output for problems and stats.

use grind_core::{Problem, Progress, Stats};

/// Convert a problem to JSON for output.
pub fn problem_json(problem: &Problem) -> serde_json::Value {
    serde_json::json!({
        "id": problem.id,
        "title": problem.title,
        "url": problem.url,
        "platform": problem.platform,
        "completed": problem.completed,
        "completedDate": problem.completed_date.map(|d| d.format("%Y-%m-%d").to_string()),
    })
}

pub fn problems_json<'a>(problems: impl IntoIterator<Item = &'a Problem>) -> serde_json::Value {
    serde_json::Value::Array(problems.into_iter().map(problem_json).collect())
}

/// Stats plus queue progress, as printed by `stats --json`.
pub fn stats_json(stats: &Stats, progress: &Progress) -> serde_json::Value {
    serde_json::json!({
        "currentStreak": stats.current_streak,
        "longestStreak": stats.longest_streak,
        "totalCompleted": stats.total_completed,
        "lastCompletedDate": stats.last_completed_date.map(|d| d.format("%Y-%m-%d").to_string()),
        "progress": progress,
    })
}

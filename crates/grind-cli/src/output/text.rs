//! Text formatting for problems and stats.

use chrono::NaiveDate;

use grind_core::{Problem, Stats};

use crate::ui::theme::{styled, styles};
use crate::ui::UiContext;

/// Length of the id prefix shown in tables.
pub const SHORT_ID_LEN: usize = 8;

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

fn format_day(day: Option<NaiveDate>) -> String {
    day.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Table row for a problem: id, status, platform, title, completed date, url.
pub fn problem_row(ctx: &UiContext, problem: &Problem) -> Vec<String> {
    let status = if problem.completed {
        let mark = if ctx.unicode { "\u{2713}" } else { "x" };
        styled(mark, styles::success(), ctx.color)
    } else {
        " ".to_string()
    };
    let id = if ctx.mode.is_pretty() {
        short_id(&problem.id).to_string()
    } else {
        problem.id.clone()
    };
    vec![
        id,
        status,
        problem.platform.to_string(),
        problem.title.clone(),
        format_day(problem.completed_date),
        problem.url.clone(),
    ]
}

pub const PROBLEM_COLUMNS: [&str; 6] = ["ID", "Done", "Platform", "Title", "Completed", "URL"];

/// One-line streak summary, e.g. "3 days (best 5)".
pub fn streak_summary(ctx: &UiContext, stats: &Stats) -> String {
    let days = if stats.current_streak == 1 {
        "day"
    } else {
        "days"
    };
    let current = styled(
        &format!("{} {}", stats.current_streak, days),
        styles::flame(),
        ctx.color,
    );
    format!("{} (best {})", current, stats.longest_streak)
}

/// Nudge shown under the stats depending on where today stands.
pub fn streak_status(stats: &Stats, today: NaiveDate) -> Option<&'static str> {
    if stats.last_completed_date == Some(today) {
        Some("Done for today. Streak is safe.")
    } else if stats.streak_at_risk(today) {
        Some("Complete a problem today to keep the streak going.")
    } else if stats.is_lapsed(today) {
        Some("Streak lapsed. Complete a problem to start a new one.")
    } else {
        None
    }
}

pub fn last_completed(stats: &Stats) -> String {
    format_day(stats.last_completed_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use grind_core::NewProblem;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_problem_row_plain_keeps_full_id() {
        let problem = NewProblem::new("Watermelon")
            .with_url("https://codeforces.com/problemset/problem/4/A")
            .build();
        let row = problem_row(&plain_ctx(), &problem);
        assert_eq!(row[0], problem.id);
        assert_eq!(row[2], "Codeforces");
        assert_eq!(row[3], "Watermelon");
        assert_eq!(row[4], "-");
        assert_eq!(row.len(), PROBLEM_COLUMNS.len());
    }

    #[test]
    fn test_streak_summary_plural() {
        let stats = Stats {
            current_streak: 1,
            longest_streak: 4,
            ..Stats::default()
        };
        assert_eq!(streak_summary(&plain_ctx(), &stats), "1 day (best 4)");
    }

    #[test]
    fn test_streak_status() {
        let stats = Stats {
            current_streak: 2,
            longest_streak: 2,
            total_completed: 2,
            last_completed_date: Some(day(10)),
        };
        assert!(streak_status(&stats, day(10)).unwrap().contains("safe"));
        assert!(streak_status(&stats, day(11)).unwrap().contains("today"));
        assert!(streak_status(&stats, day(13)).unwrap().contains("lapsed"));
        assert_eq!(streak_status(&Stats::default(), day(10)), None);
    }
}

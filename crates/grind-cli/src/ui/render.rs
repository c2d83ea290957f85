//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::{OutputMode, UiContext};
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Grind · command (context)"
/// Plain mode: "grind command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Grind", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("grind {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a text progress bar such as `[#####-----] 50%`.
pub fn progress_bar(ctx: &UiContext, percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;
    let (full, empty) = if ctx.unicode {
        ("\u{2588}", "\u{2591}")
    } else {
        ("#", "-")
    };
    let bar = format!("{}{}", full.repeat(filled), empty.repeat(width - filled));
    format!("[{}] {}%", styled(&bar, styles::success(), ctx.color), percent)
}

/// Render a table without borders.
///
/// Pretty mode: dim headers, padded columns
/// Plain mode: tab-separated values, no header
pub fn simple_table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| {
            let cell = Cell::new(h);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..headers.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Print a message to stdout unless the mode is JSON.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(styled(h, styles::dim(), ctx.color));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h.trim_start_matches("Hint: ")));
        }
    }
    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

/// Print a warning to stderr.
pub fn print_warning(ctx: &UiContext, message: &str) {
    if ctx.mode.is_pretty() {
        eprintln!("{}", badge(ctx, Badge::Warn, message));
    } else {
        eprintln!("warning={}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "stats", Some("today"));
        assert_eq!(h, "Grind \u{00B7} stats (today)");
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "list", None), "grind list");
    }

    #[test]
    fn test_kv_plain_normalizes_key() {
        assert_eq!(kv(&plain_ctx(), "Current Streak", "3"), "current_streak=3");
    }

    #[test]
    fn test_kv_pretty() {
        assert_eq!(kv(&pretty_ctx(), "Current Streak", "3"), "Current Streak: 3");
    }

    #[test]
    fn test_progress_bar_ascii() {
        assert_eq!(progress_bar(&plain_ctx(), 50, 10), "[#####-----] 50%");
        assert_eq!(progress_bar(&plain_ctx(), 0, 4), "[----] 0%");
        assert_eq!(progress_bar(&plain_ctx(), 100, 4), "[####] 100%");
    }

    #[test]
    fn test_simple_table_plain_has_no_header() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];
        assert_eq!(simple_table(&plain_ctx(), &["X", "Y"], &rows), "a\tb\nc\td");
    }

    #[test]
    fn test_simple_table_pretty_has_header() {
        let rows = vec![vec!["two-sum".to_string()]];
        let out = simple_table(&pretty_ctx(), &["Title"], &rows);
        assert!(out.contains("Title"));
        assert!(out.contains("two-sum"));
    }

    #[test]
    fn test_error_message_plain() {
        let msg = error_message(&plain_ctx(), "No problem x", Some("Hint: Run `grind list`."));
        assert_eq!(msg, "error=No problem x\nhint=Run `grind list`.");
    }

    #[test]
    fn test_error_message_pretty() {
        let msg = error_message(&pretty_ctx(), "boom", None);
        assert_eq!(msg, "[\u{2717}] boom");
    }
}

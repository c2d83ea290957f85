//! Free-text to problem conversion.
//!
//! Each non-blank line becomes one problem. The first URL-like token is the
//! link; whatever is left is the title.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::problem::NewProblem;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.)[^\s<>()\[\]]+").expect("URL pattern is valid")
});

/// Characters stripped from the edges of a title once the URL is removed.
const TITLE_TRIM: &[char] = &['-', '|', ':', ',', ';', '(', ')', '[', ']', '<', '>'];

/// Convert free text into problems, one per non-blank line.
pub fn parse_problems(text: &str) -> Vec<NewProblem> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| parse_line(line, index + 1))
        .collect()
}

/// Convert a single line. `position` numbers the placeholder title.
pub fn parse_line(line: &str, position: usize) -> NewProblem {
    let (url, remainder) = match URL_PATTERN.find(line) {
        Some(found) => {
            let url = found.as_str().trim_end_matches(['.', ',', ';']).to_string();
            let remainder = format!("{} {}", &line[..found.start()], &line[found.end()..]);
            (url, remainder)
        }
        None => (String::new(), line.to_string()),
    };

    let title = clean_title(&remainder);
    let title = if title.is_empty() {
        format!("Problem {}", position)
    } else {
        title
    };

    NewProblem::new(title).with_url(url)
}

fn clean_title(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| c.is_whitespace() || TITLE_TRIM.contains(&c))
        .to_string()
}

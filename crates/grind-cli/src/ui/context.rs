//! Output routing: which stream capabilities we have and what the user asked for.

use std::io::IsTerminal;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document, nothing else
    Json,
    /// `key=value` lines for scripts
    #[default]
    Plain,
    /// Tables, badges and color for a person at a terminal
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }

    /// `--json` beats `--format`; anything but `plain` falls through to
    /// whatever the terminal supports.
    fn choose(json: bool, format: Option<&str>, term: Terminal) -> Self {
        match (json, format) {
            (true, _) => Self::Json,
            (false, Some("plain")) => Self::Plain,
            _ if term.fancy() => Self::Pretty,
            _ => Self::Plain,
        }
    }
}

/// Capabilities of one output stream, read once from the environment.
#[derive(Debug, Clone, Copy, Default)]
struct Terminal {
    tty: bool,
    dumb: bool,
    no_color: bool,
}

impl Terminal {
    fn detect(tty: bool) -> Self {
        Self {
            tty,
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }

    fn fancy(self) -> bool {
        self.tty && !self.dumb
    }

    fn color(self, allowed: bool) -> bool {
        allowed && self.fancy() && !self.no_color
    }
}

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub mode: OutputMode,
}

impl UiContext {
    /// Context for stdout. Color also needs `color_allowed`, which folds in
    /// `--no-color` and the `[ui] color` config key.
    pub fn from_env(json_flag: bool, format_flag: Option<&str>, color_allowed: bool) -> Self {
        Self::for_stream(
            Terminal::detect(std::io::stdout().is_terminal()),
            json_flag,
            format_flag,
            color_allowed,
        )
    }

    /// Context for stderr diagnostics; never JSON.
    pub fn for_errors(color_allowed: bool) -> Self {
        Self::for_stream(
            Terminal::detect(std::io::stderr().is_terminal()),
            false,
            None,
            color_allowed,
        )
    }

    fn for_stream(
        term: Terminal,
        json_flag: bool,
        format_flag: Option<&str>,
        color_allowed: bool,
    ) -> Self {
        Self {
            color: term.color(color_allowed),
            unicode: !term.dumb,
            mode: OutputMode::choose(json_flag, format_flag, term),
        }
    }
}

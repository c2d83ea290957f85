use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use grind_core::VERSION;

/// Grind - a daily coding-practice queue with streak tracking
#[derive(Parser)]
#[command(name = "grind")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (defaults to config, then $XDG_DATA_HOME/grind)
    #[arg(short, long, global = true, env = "GRIND_DATA", value_name = "DIR")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Problem title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Link to the problem statement
    #[arg(long)]
    pub url: Option<String>,

    /// Output the new problem as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `import-text` command
#[derive(Args)]
pub struct ImportTextArgs {
    /// File with one problem per line (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Output the added problems as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only show problems not yet completed
    #[arg(long)]
    pub pending: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `next` and `stats` commands
#[derive(Args)]
pub struct ViewArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `done` and `undo` commands
#[derive(Args)]
pub struct MarkArgs {
    /// Problem id (full id or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output the updated stats as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file ("-" for stdout)
    #[arg(value_name = "DEST")]
    pub destination: String,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Bundle file produced by `grind export` ("-" for stdin)
    #[arg(value_name = "SRC")]
    pub source: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add one problem to the end of the queue
    Add(AddArgs),

    /// Add problems from free text, one per line
    ImportText(ImportTextArgs),

    /// List the queue in insertion order
    List(ListArgs),

    /// Show the next incomplete problem
    Next(ViewArgs),

    /// Mark a problem completed today
    Done(MarkArgs),

    /// Clear a problem's completion
    Undo(MarkArgs),

    /// Show streak statistics and progress
    Stats(ViewArgs),

    /// Write the queue, stats and theme to a bundle file
    Export(ExportArgs),

    /// Replace the queue with a bundle file
    Import(ImportArgs),

    /// Set the theme preference stored with the data
    Theme {
        #[arg(value_enum, value_name = "THEME")]
        theme: ThemeChoice,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

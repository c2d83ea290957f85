//! Grind CLI - a daily coding-practice queue with streak tracking
//!
//! Thin command-line front end over `grind-core`: every command opens the
//! data directory, restores the tracker against today's date, applies one
//! operation and saves.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;
mod ui;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{misc, problems, progress, transfer};
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV};
use crate::errors::CliError;
use crate::ui::{print_error, UiContext};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = UiContext::for_errors(ctx.color_allowed());
        match e.downcast_ref::<CliError>() {
            Some(cli_error) => {
                print_error(&ui_ctx, &cli_error.to_string(), cli_error.hint());
                std::process::exit(cli_error.exit_code());
            }
            None => {
                print_error(&ui_ctx, &format!("{:#}", e), None);
                std::process::exit(1);
            }
        }
    }
}

/// Route diagnostics to stderr, filtered by `GRIND_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Add(args) => problems::handle_add(ctx, args),
        Commands::ImportText(args) => problems::handle_import_text(ctx, args),
        Commands::List(args) => problems::handle_list(ctx, args),
        Commands::Next(args) => problems::handle_next(ctx, args),
        Commands::Done(args) => progress::handle_done(ctx, args),
        Commands::Undo(args) => progress::handle_undo(ctx, args),
        Commands::Stats(args) => progress::handle_stats(ctx, args),
        Commands::Export(args) => transfer::handle_export(ctx, args),
        Commands::Import(args) => transfer::handle_import(ctx, args),
        Commands::Theme { theme } => misc::handle_theme(ctx, *theme),
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}

//! Completion commands: done, undo, stats.

use grind_core::{Clock, MarkOutcome};

use crate::app::{AppContext, Session};
use crate::cli::{MarkArgs, ViewArgs};
use crate::errors::CliError;
use crate::output::{last_completed, stats_json, streak_status, streak_summary};
use crate::ui::{
    badge, blank_line, header, hint, kv, print, progress_bar, Badge, OutputMode, UiContext,
};

const BAR_WIDTH: usize = 20;

pub fn handle_done(ctx: &AppContext, args: &MarkArgs) -> anyhow::Result<()> {
    handle_mark(ctx, args, true)
}

pub fn handle_undo(ctx: &AppContext, args: &MarkArgs) -> anyhow::Result<()> {
    handle_mark(ctx, args, false)
}

fn handle_mark(ctx: &AppContext, args: &MarkArgs, done: bool) -> anyhow::Result<()> {
    let mut session = ctx.open_session()?;
    let problem = session
        .tracker
        .store()
        .resolve(&args.id)
        .map_err(CliError::from)?;
    let (id, title) = (problem.id.clone(), problem.title.clone());

    let outcome = if done {
        session.tracker.mark_complete(&id)
    } else {
        session.tracker.mark_incomplete(&id)
    }
    .map_err(CliError::from)?;

    if outcome == MarkOutcome::Changed {
        ctx.persist(&mut session);
    }

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let progress = session.tracker.store().progress();
        println!(
            "{}",
            serde_json::to_string_pretty(&stats_json(session.tracker.stats(), &progress))?
        );
        return Ok(());
    }
    if ctx.quiet() {
        return Ok(());
    }

    let message = match (outcome, done) {
        (MarkOutcome::Changed, true) => format!("Completed {}", title),
        (MarkOutcome::Changed, false) => format!("Reopened {}", title),
        (MarkOutcome::Unchanged, true) => format!("{} was already completed", title),
        (MarkOutcome::Unchanged, false) => format!("{} is not completed", title),
    };
    let kind = if outcome == MarkOutcome::Changed {
        Badge::Ok
    } else {
        Badge::Info
    };
    print(&ui_ctx, &badge(&ui_ctx, kind, &message));
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Streak", &streak_summary(&ui_ctx, session.tracker.stats())),
    );
    Ok(())
}

pub fn handle_stats(ctx: &AppContext, args: &ViewArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    render_stats(ctx, &ui_ctx, &session)
}

fn render_stats(ctx: &AppContext, ui_ctx: &UiContext, session: &Session) -> anyhow::Result<()> {
    let stats = session.tracker.stats();
    let progress = session.tracker.store().progress();

    match ui_ctx.mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats_json(stats, &progress))?
            );
        }
        OutputMode::Pretty => {
            if !ctx.quiet() {
                print(ui_ctx, &header(ui_ctx, "stats", None));
                blank_line(ui_ctx);
            }
            print(ui_ctx, &kv(ui_ctx, "Streak", &streak_summary(ui_ctx, stats)));
            print(
                ui_ctx,
                &kv(ui_ctx, "Completed", &stats.total_completed.to_string()),
            );
            print(ui_ctx, &kv(ui_ctx, "Last", &last_completed(stats)));
            print(
                ui_ctx,
                &kv(ui_ctx, "Progress", &progress_bar(ui_ctx, progress.percent, BAR_WIDTH)),
            );
            let today = session.tracker.clock().today();
            if let Some(status) = streak_status(stats, today) {
                if !ctx.quiet() {
                    blank_line(ui_ctx);
                    print(ui_ctx, &hint(ui_ctx, status));
                }
            }
        }
        OutputMode::Plain => {
            print(ui_ctx, &kv(ui_ctx, "current_streak", &stats.current_streak.to_string()));
            print(ui_ctx, &kv(ui_ctx, "longest_streak", &stats.longest_streak.to_string()));
            print(ui_ctx, &kv(ui_ctx, "total_completed", &stats.total_completed.to_string()));
            print(ui_ctx, &kv(ui_ctx, "last_completed_date", &last_completed(stats)));
            print(
                ui_ctx,
                &kv(
                    ui_ctx,
                    "progress",
                    &format!("{}/{}", progress.completed, progress.total),
                ),
            );
        }
    }
    Ok(())
}

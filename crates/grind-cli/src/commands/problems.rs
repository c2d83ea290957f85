//! Queue commands: add, import-text, list, next.

use std::io::Read;

use grind_core::parser::parse_problems;
use grind_core::NewProblem;

use crate::app::AppContext;
use crate::cli::{AddArgs, ImportTextArgs, ListArgs, ViewArgs};
use crate::errors::CliError;
use crate::output::{problem_json, problem_row, problems_json, PROBLEM_COLUMNS};
use crate::ui::{badge, blank_line, header, hint, kv, print, simple_table, Badge, OutputMode};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        return Err(CliError::invalid_input("Problem title is empty").into());
    }

    let mut session = ctx.open_session()?;
    let mut new_problem = NewProblem::new(title);
    if let Some(url) = &args.url {
        new_problem = new_problem.with_url(url.trim());
    }
    let id = session.tracker.add(new_problem);
    ctx.persist(&mut session);

    let Some(problem) = session.tracker.store().get(&id) else {
        return Ok(());
    };
    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&problem_json(problem))?);
    } else if !ctx.quiet() {
        print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &format!("Added {}", problem.title)));
        print(&ui_ctx, &kv(&ui_ctx, "ID", &problem.id));
        print(&ui_ctx, &kv(&ui_ctx, "Platform", problem.platform.as_str()));
    }
    Ok(())
}

pub fn handle_import_text(ctx: &AppContext, args: &ImportTextArgs) -> anyhow::Result<()> {
    let text = match args.file.as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::Error::new(CliError::not_found(
                    format!("No such file: {}", path),
                    "Hint: Pass a text file with one problem per line, or pipe it on stdin.",
                ))
            } else {
                anyhow::anyhow!("Failed to read {}: {}", path, e)
            }
        })?,
    };

    let parsed = parse_problems(&text);
    let mut session = ctx.open_session()?;
    let ids = session.tracker.add_many(parsed);
    if !ids.is_empty() {
        ctx.persist(&mut session);
    }

    let ui_ctx = ctx.ui_context(args.json, None);
    let added = ids
        .iter()
        .filter_map(|id| session.tracker.store().get(id));
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&problems_json(added))?);
        return Ok(());
    }
    if ctx.quiet() {
        return Ok(());
    }

    if ids.is_empty() {
        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "No problems found in input"));
        return Ok(());
    }
    let rows: Vec<Vec<String>> = added.map(|p| problem_row(&ui_ctx, p)).collect();
    print(
        &ui_ctx,
        &badge(&ui_ctx, Badge::Ok, &format!("Added {} problems", ids.len())),
    );
    blank_line(&ui_ctx);
    print(&ui_ctx, &simple_table(&ui_ctx, &PROBLEM_COLUMNS, &rows));
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let store = session.tracker.store();
    let problems: Vec<_> = store
        .iter()
        .filter(|problem| !args.pending || !problem.completed)
        .collect();

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    match ui_ctx.mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&problems_json(problems.iter().copied()))?
            );
        }
        OutputMode::Pretty | OutputMode::Plain => {
            if problems.is_empty() {
                if !ctx.quiet() {
                    print(&ui_ctx, &hint(&ui_ctx, "grind add <TITLE> --url <URL>"));
                }
                return Ok(());
            }
            let progress = store.progress();
            let context = format!("{}/{} done", progress.completed, progress.total);
            if !ctx.quiet() {
                print(&ui_ctx, &header(&ui_ctx, "list", Some(&context)));
                blank_line(&ui_ctx);
            }
            let rows: Vec<Vec<String>> = problems
                .iter()
                .map(|problem| problem_row(&ui_ctx, problem))
                .collect();
            print(&ui_ctx, &simple_table(&ui_ctx, &PROBLEM_COLUMNS, &rows));
        }
    }
    Ok(())
}

pub fn handle_next(ctx: &AppContext, args: &ViewArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let next = session.tracker.store().next_incomplete();
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    if ui_ctx.mode.is_json() {
        let value = next.map(problem_json).unwrap_or(serde_json::Value::Null);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match next {
        Some(problem) => {
            if !ctx.quiet() {
                print(&ui_ctx, &header(&ui_ctx, "next", None));
                blank_line(&ui_ctx);
            }
            print(&ui_ctx, &kv(&ui_ctx, "Title", &problem.title));
            print(&ui_ctx, &kv(&ui_ctx, "Platform", problem.platform.as_str()));
            if !problem.url.is_empty() {
                print(&ui_ctx, &kv(&ui_ctx, "URL", &problem.url));
            }
            print(&ui_ctx, &kv(&ui_ctx, "ID", &problem.id));
            if !ctx.quiet() {
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &hint(&ui_ctx, &format!("grind done {}", problem.id)),
                );
            }
        }
        None if !ctx.quiet() => {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Queue is clear"));
        }
        None => {}
    }
    Ok(())
}

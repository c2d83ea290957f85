//! Bundle export and import.

use std::io::Read;
use std::path::Path;

use grind_core::fs::write_atomic;
use grind_core::storage::Settings;
use grind_core::Bundle;

use crate::app::AppContext;
use crate::cli::{ExportArgs, ImportArgs};
use crate::errors::CliError;
use crate::ui::{badge, kv, print, Badge};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let settings = ctx.load_settings(&session.store);
    let json = session.tracker.export(settings.dark_mode).to_json()?;

    if args.destination == "-" {
        println!("{}", json);
        return Ok(());
    }

    let destination = Path::new(&args.destination);
    write_atomic(destination, json.as_bytes()).map_err(|e| {
        anyhow::anyhow!("Failed to write bundle {}: {}", destination.display(), e)
    })?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        print(
            &ui_ctx,
            &badge(
                &ui_ctx,
                Badge::Ok,
                &format!("Exported {} problems", session.tracker.store().len()),
            ),
        );
        print(&ui_ctx, &kv(&ui_ctx, "Path", &destination.display().to_string()));
    }
    Ok(())
}

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let raw = if args.source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&args.source).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::Error::new(CliError::not_found(
                    format!("No such file: {}", args.source),
                    "Hint: Create a bundle with `grind export <DEST>`.",
                ))
            } else {
                anyhow::anyhow!("Failed to read {}: {}", args.source, e)
            }
        })?
    };

    let bundle = Bundle::from_json(&raw).map_err(CliError::from)?;
    let dark_mode = bundle.dark_mode;

    let mut session = ctx.open_session()?;
    session.tracker.import(bundle).map_err(CliError::from)?;
    ctx.persist(&mut session);
    ctx.save_settings(&mut session.store, &Settings { dark_mode });

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let stats = session.tracker.stats();
        print(
            &ui_ctx,
            &badge(
                &ui_ctx,
                Badge::Ok,
                &format!("Imported {} problems", session.tracker.store().len()),
            ),
        );
        print(
            &ui_ctx,
            &kv(&ui_ctx, "Longest Streak", &stats.longest_streak.to_string()),
        );
    }
    Ok(())
}

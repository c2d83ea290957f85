use clap::CommandFactory;
use clap_complete::generate;

use grind_core::storage::Settings;

use crate::app::AppContext;
use crate::cli::{Cli, ThemeChoice};
use crate::ui::{badge, print, Badge};

pub fn handle_theme(ctx: &AppContext, theme: ThemeChoice) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let dark_mode = theme == ThemeChoice::Dark;
    ctx.save_settings(&mut store, &Settings { dark_mode });

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let name = if dark_mode { "dark" } else { "light" };
        print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &format!("Theme set to {}", name)));
    }
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "grind", &mut std::io::stdout());
    Ok(())
}

//! Application context for the Grind CLI.
//!
//! Bundles the parsed arguments with the lazily-loaded config and knows how
//! to open the data directory.

use once_cell::unsync::OnceCell;
use tracing::{debug, warn};

use grind_core::storage::{self, JsonDirStore, Settings};
use grind_core::{SystemClock, Tracker};

use crate::cli::Cli;
use crate::config::{read_config, GrindConfig};
use crate::errors::CliError;
use crate::ui::{print_warning, UiContext};

use super::resolver::{resolve_config_path, resolve_data_dir};

/// An opened data directory plus the tracker restored from it.
pub struct Session {
    pub store: JsonDirStore,
    pub tracker: Tracker<SystemClock>,
}

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<GrindConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&GrindConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            debug!(path = %path.display(), "loading config");
            read_config(&path)
        })
    }

    /// Whether color is allowed by flag and config.
    pub fn color_allowed(&self) -> bool {
        !self.cli.no_color && self.config().map(|c| c.ui.color).unwrap_or(true)
    }

    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.color_allowed())
    }

    pub fn open_store(&self) -> anyhow::Result<JsonDirStore> {
        let dir = resolve_data_dir(self.cli.data.as_deref(), self.config()?)?;
        debug!(dir = %dir.display(), "opening data directory");
        Ok(JsonDirStore::open(dir).map_err(CliError::from)?)
    }

    /// Open the data directory and restore the tracker against today's date.
    pub fn open_session(&self) -> anyhow::Result<Session> {
        let store = self.open_store()?;
        let tracker = storage::load_tracker(&store, SystemClock);
        Ok(Session { store, tracker })
    }

    /// Persist the session. A failed write is reported but not fatal; the
    /// command's in-memory result stands.
    pub fn persist(&self, session: &mut Session) {
        if let Err(err) = storage::save_tracker(&mut session.store, &session.tracker) {
            warn!(error = %err, "failed to persist tracker");
            print_warning(
                &UiContext::for_errors(self.color_allowed()),
                &format!("Changes were not saved: {}", err),
            );
        }
    }

    pub fn load_settings(&self, store: &JsonDirStore) -> Settings {
        storage::load_settings(store)
    }

    pub fn save_settings(&self, store: &mut JsonDirStore, settings: &Settings) {
        if let Err(err) = storage::save_settings(store, settings) {
            warn!(error = %err, "failed to persist settings");
            print_warning(
                &UiContext::for_errors(self.color_allowed()),
                &format!("Settings were not saved: {}", err),
            );
        }
    }
}

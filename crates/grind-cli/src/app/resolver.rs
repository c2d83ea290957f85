//! Path resolution for the config file and data directory.

use std::path::PathBuf;

use crate::config::{default_config_path, default_data_dir, GrindConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking `GRIND_CONFIG` first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory: `--data`/`GRIND_DATA`, then config, then XDG.
pub fn resolve_data_dir(flag: Option<&str>, config: &GrindConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.store.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_data_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreSection;

    fn config_with(path: Option<&str>) -> GrindConfig {
        GrindConfig {
            store: StoreSection {
                path: path.map(str::to_string),
            },
            ..GrindConfig::default()
        }
    }

    #[test]
    fn test_flag_wins_over_config() {
        let dir = resolve_data_dir(Some("/flag"), &config_with(Some("/config"))).unwrap();
        assert_eq!(dir, PathBuf::from("/flag"));
    }

    #[test]
    fn test_config_used_without_flag() {
        let dir = resolve_data_dir(None, &config_with(Some("/config"))).unwrap();
        assert_eq!(dir, PathBuf::from("/config"));
    }

    #[test]
    fn test_blank_flag_is_ignored() {
        let dir = resolve_data_dir(Some("  "), &config_with(Some("/config"))).unwrap();
        assert_eq!(dir, PathBuf::from("/config"));
    }
}

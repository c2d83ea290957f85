use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GrindConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    /// Data directory holding `problems.json`, `stats.json`, `settings.json`
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

/// Read the config file, treating a missing file as all defaults.
pub fn read_config(path: &Path) -> anyhow::Result<GrindConfig> {
    if !path.exists() {
        return Ok(GrindConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("grind"));
        }
    }
    Ok(home_dir()?.join(".config").join("grind"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("grind"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("grind"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config(&dir.path().join("config.toml")).unwrap();
        assert!(config.store.path.is_none());
        assert!(config.ui.color);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ncolor = false\n").unwrap();

        let config = read_config(&path).unwrap();
        assert!(!config.ui.color);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_store_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\npath = \"/tmp/grind-data\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.store.path.as_deref(), Some("/tmp/grind-data"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store\n").unwrap();
        assert!(read_config(&path).is_err());
    }
}

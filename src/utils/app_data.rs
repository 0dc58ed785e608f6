use crate::error::{LindexError, Result};
use crate::index::store::DEFAULT_INDEX_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "lindex";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the index snapshot lives. Relative paths resolve against the
    /// working directory.
    #[serde(default)]
    pub index_file: Option<PathBuf>,

    /// Lines of context shown around each hit
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_context_lines() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            index_file: None,
            context_lines: default_context_lines(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| LindexError::Config {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&content).map_err(|e| LindexError::Config {
            reason: format!("failed to parse {}: {}", path.display(), e),
        })
    }

    /// The index file to use, falling back to the default name in the
    /// working directory.
    pub fn index_path(&self) -> PathBuf {
        self.index_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE))
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_data_dir()?.join(CONFIG_FILE))
}

/// Get the application data directory (XDG data dir on Linux)
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        dirs::data_dir()
    };

    let base = base.ok_or_else(|| LindexError::Config {
        reason: "could not determine app data directory".to_string(),
    })?;
    Ok(base.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.index_file, None);
        assert_eq!(config.context_lines, 2);
        assert_eq!(config.index_path(), PathBuf::from(DEFAULT_INDEX_FILE));
    }

    #[test]
    fn test_app_config_partial_json() {
        let json = r#"{"context_lines": 5}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.context_lines, 5);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.index_file, None);
    }

    #[test]
    fn test_app_config_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_written_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            index_file: Some(PathBuf::from("/tmp/idx.json")),
            context_lines: 4,
            log_level: "debug".to_string(),
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.index_path(), PathBuf::from("/tmp/idx.json"));
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_malformed_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, LindexError::Config { .. }));
    }
}

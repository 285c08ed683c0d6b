//! Application configuration, loaded from `config.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use selectfy::{Marks, SelectConfig, SelectError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;
use crate::render::{MarkStyles, StyleTable};

/// Config loading error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SelectError),
}

/// Everything the app reads from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub select: SelectConfig,
    pub marks: Marks,
    pub log: LogConfig,
}

/// Log file settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Archived logs to keep besides the current one.
    pub keep: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { keep: 10 }
    }
}

/// Where the loaded config came from.
#[derive(Debug)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    Rejected(PathBuf, ConfigError),
}

impl ConfigSource {
    /// Report the outcome once a logger is installed.
    pub fn log(&self) {
        match self {
            ConfigSource::Defaults => info!("using default config"),
            ConfigSource::File(path) => info!("loaded config from {}", path.display()),
            ConfigSource::Rejected(path, e) => warn!("ignoring config {}: {}", path.display(), e),
        }
    }
}

impl AppConfig {
    /// Load from the platform config file, falling back to defaults.
    pub fn load() -> (Self, ConfigSource) {
        Self::load_from(paths::config_file())
    }

    /// A missing file yields defaults; an unreadable or invalid one is rejected.
    fn load_from(path: Option<PathBuf>) -> (Self, ConfigSource) {
        let Some(path) = path.filter(|p| p.exists()) else {
            return (Self::default(), ConfigSource::Defaults);
        };
        match Self::from_file(&path) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(e) => (Self::default(), ConfigSource::Rejected(path, e)),
        }
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&contents)?;
        config.marks.validate()?;
        Ok(config)
    }

    /// Resolve the mark classes against the style table.
    pub fn mark_styles(&self, table: &StyleTable) -> Result<MarkStyles, SelectError> {
        let resolve = |class: &str| {
            table.get(class).ok_or_else(|| {
                SelectError::InvalidConfig(format!(
                    "unknown style class '{}' (known: {})",
                    class,
                    table.names().join(", ")
                ))
            })
        };
        Ok(MarkStyles {
            selected: resolve(&self.marks.selected_class)?,
            highlighted: resolve(&self.marks.highlight_class)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"select": {"ctrl_select": false}, "marks": {"selected_class": "reverse"}}"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(!config.select.ctrl_select);
        assert!(config.select.shift_select);
        assert_eq!(config.marks.selected_class, "reverse");
        assert_eq!(config.marks.selectable, "selectable");
        assert_eq!(config.log.keep, 10);
    }

    #[test]
    fn test_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let (config, source) = AppConfig::load_from(Some(path.clone()));
        assert_eq!(config, AppConfig::default());
        assert!(matches!(source, ConfigSource::Defaults));

        fs::write(&path, r#"{"log": {"keep": 2}}"#).unwrap();
        let (config, source) = AppConfig::load_from(Some(path.clone()));
        assert_eq!(config.log.keep, 2);
        assert!(matches!(source, ConfigSource::File(p) if p == path));

        fs::write(&path, "{not json").unwrap();
        let (config, source) = AppConfig::load_from(Some(path));
        assert_eq!(config, AppConfig::default());
        assert!(matches!(source, ConfigSource::Rejected(_, ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(matches!(AppConfig::from_file(&path), Err(ConfigError::Io(_))));

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(AppConfig::from_file(&path), Err(ConfigError::Parse(_))));

        fs::write(&path, r#"{"marks": {"highlight_class": "selected"}}"#).unwrap();
        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::Invalid(SelectError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn test_mark_styles() {
        let table = StyleTable::default();
        assert!(AppConfig::default().mark_styles(&table).is_ok());

        let mut config = AppConfig::default();
        config.marks.highlight_class = "sparkle".to_string();
        assert!(config.mark_styles(&table).is_err());
    }
}

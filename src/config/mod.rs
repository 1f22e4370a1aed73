use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    errors::ConfigError,
};

const DEFAULT_DATA_FILE: &str = "wallet_data.json";
const DEFAULT_RETENTION: usize = 5;

/// User-editable settings stored in `config/config.json` under the app directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Store snapshot location; relative paths resolve against the app directory.
    #[serde(default = "Config::default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "Config::default_backup_retention")]
    pub backup_retention: usize,
    #[serde(default = "Config::default_color_enabled")]
    pub color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::default_data_file(),
            backup_retention: Self::default_backup_retention(),
            color_enabled: Self::default_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_data_file() -> PathBuf {
        PathBuf::from(DEFAULT_DATA_FILE)
    }

    pub fn default_backup_retention() -> usize {
        DEFAULT_RETENTION
    }

    pub fn default_color_enabled() -> bool {
        true
    }
}

/// Loads and saves [`Config`] for one application base directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(PathResolver::resolve_base(None))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
            base,
        })
    }

    /// Returns the stored config, or defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute location of the store snapshot described by `config`.
    pub fn data_path(&self, config: &Config) -> PathBuf {
        PathResolver::data_file_in(&self.base, &config.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
        assert_eq!(
            manager.data_path(&Config::default()),
            temp.path().join("wallet_data.json")
        );
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            data_file: PathBuf::from("alt.json"),
            backup_retention: 2,
            color_enabled: false,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "color_enabled": false }"#).unwrap();

        let config = manager.load().unwrap();
        assert!(!config.color_enabled);
        assert_eq!(config.backup_retention, 5);
    }

    #[test]
    fn malformed_file_is_a_serde_error() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "not json").unwrap();
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }
}

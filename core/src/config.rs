use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::repository::file::default_data_dir;
use crate::time::Locale;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "lifetrack";
pub const CONFIG_ENV_VAR: &str = "LIFETRACK_CONFIG_DIR";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine configuration directory.")]
    CannotDetermineConfigDir,
    #[error("Could not determine data directory: {0}")]
    CannotDetermineDataDir(String),
    #[error("I/O error accessing config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file (TOML): {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize config data (TOML): {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Month names used for dates and the calendar title.
    pub locale: Locale,
    /// Keep days on disk between sessions. Off by default: records then
    /// live only as long as the process.
    pub persist: bool,
    /// Where `days.json` and `logs/` go. Defaults to `~/.lifetrack`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            persist: false,
            data_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn resolved_data_dir(&self) -> Result<PathBuf, Error> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir().map_err(|e| Error::CannotDetermineDataDir(e.to_string())),
        }
    }

    pub fn log_dir(&self) -> Result<PathBuf, Error> {
        Ok(self.resolved_data_dir()?.join("logs"))
    }
}

/// `$LIFETRACK_CONFIG_DIR/config.toml`, else `<config dir>/lifetrack/config.toml`.
pub fn get_config_path() -> Result<PathBuf, Error> {
    let config_dir_path = match std::env::var(CONFIG_ENV_VAR).ok() {
        Some(path_str) => PathBuf::from(path_str),
        None => dirs::config_dir()
            .ok_or(Error::CannotDetermineConfigDir)?
            .join(APP_CONFIG_DIR),
    };

    if !config_dir_path.exists() {
        fs::create_dir_all(&config_dir_path)?;
    }

    Ok(config_dir_path.join(CONFIG_FILE_NAME))
}

/// Reads the config, writing defaults out first if the file is missing.
pub fn load_config(config_path: &Path) -> Result<Config, Error> {
    if config_path.exists() {
        let content = fs::read_to_string(config_path)?;
        Ok(toml::from_str(&content)?)
    } else {
        let config = Config::default();
        save_config(config_path, &config)?;
        Ok(config)
    }
}

pub fn save_config(config_path: &Path, config: &Config) -> Result<(), Error> {
    if let Some(parent_dir) = config_path.parent() {
        if !parent_dir.exists() {
            fs::create_dir_all(parent_dir)?;
        }
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(config_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join(CONFIG_FILE_NAME);
        let config = load_config(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "locale = \"english\"\npersist = true\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.locale, Locale::English);
        assert!(config.persist);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_bad_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "persist = maybe").unwrap();
        assert!(matches!(load_config(&path), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_config_dir_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("custom");
        std::env::set_var(CONFIG_ENV_VAR, &config_dir);
        let path = get_config_path();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(path.unwrap(), config_dir.join(CONFIG_FILE_NAME));
        assert!(config_dir.is_dir());
    }

    #[test]
    fn test_log_dir_under_data_dir() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/lt")),
            ..Config::default()
        };
        assert_eq!(config.log_dir().unwrap(), PathBuf::from("/tmp/lt/logs"));
    }
}

use config::{Config, ConfigError, Environment, File};
use log::LevelFilter;
use serde::Deserialize;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_SETTINGS_FILE, SETTINGS_ENV_PREFIX};

/// Настройки демонстрационного бинарника. Сама библиотека настроек не читает.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { log_file: PathBuf::from(DEFAULT_LOG_FILE), log_level: DEFAULT_LOG_LEVEL.to_string() }
    }
}

impl Settings {
    /// Значения по умолчанию, затем необязательный `printlog.toml`, затем переменные `PRINTLOG_*`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_SETTINGS_FILE)
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("log_file", DEFAULT_LOG_FILE)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(SETTINGS_ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level.parse().map_err(|_| ConfigError::Message(format!("Unknown log level '{}'", self.log_level)))
    }
}

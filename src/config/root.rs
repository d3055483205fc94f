use super::chart::ChartConfig;

use config::{ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("configuration error")]
    ParseError(#[from] ConfigError),
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Chart appearance settings.
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Config {
    /// Load settings from a JSON file. Only the file is consulted; nothing
    /// is taken from the environment.
    pub fn new(path: &Path) -> Result<Self, ConfigurationError> {
        let config_file = File::from(path).format(FileFormat::Json);
        config::Config::builder()
            .add_source(config_file)
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| e.into())
    }
}

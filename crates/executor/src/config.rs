use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

/// Config file looked up in the working directory unless `BARTER_CONFIG` points elsewhere.
pub const DEFAULT_CONFIG_FILE: &str = "Barter.toml";
pub const CONFIG_PATH_VAR: &str = "BARTER_CONFIG";
pub const ENV_PREFIX: &str = "BARTER";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `.csv` files are read as CSV, everything else as text.
    #[default]
    Auto,
    Text,
    Csv,
}

impl InputFormat {
    /// Resolves `Auto` against the extension of `path`.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_csv = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
                if is_csv {
                    InputFormat::Csv
                } else {
                    InputFormat::Text
                }
            }
            explicit => explicit,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct IoConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input_format: InputFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub io: IoConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Applies the positional `[input] [output]` arguments on top of the loaded values.
    pub fn with_args(mut self, input: Option<String>, output: Option<String>) -> Self {
        if let Some(input) = input {
            self.io.input_path = PathBuf::from(input);
        }
        if let Some(output) = output {
            self.io.output_path = PathBuf::from(output);
        }
        self
    }
}

/// Loads configuration from defaults, an optional config file and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let config_file_path = env::var(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

    build_config(&config_file_path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_config(config_file_path: &Path, environment: Environment) -> Result<Config, Error> {
    let s = ConfigLoader::builder()
        .set_default("io.input_path", "input.txt")
        .and_then(|b| b.set_default("io.output_path", "output.txt"))
        .and_then(|b| b.set_default("io.input_format", "auto"))
        .and_then(|b| b.set_default("logging.level", "info"))
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?
        .add_source(File::from(config_file_path).required(false))
        .add_source(environment)
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}

//! Layered host configuration.
//!
//! Sources are merged in this order, later ones winning:
//! 1. built-in defaults
//! 2. the YAML file passed with `--config`
//! 3. environment variables `REGDESK__*` (nested keys split on `__`)
//! 4. command line flags

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use registration::DatabaseConfig;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "REGDESK__";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file does not exist: {0}")]
    Missing(String),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
    #[error("HOME environment variable is not set")]
    HomeMissing,
    #[error("failed to render configuration: {0}")]
    Render(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Base directory for relative store and log paths; `~` is expanded.
    pub home_dir: String,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            home_dir: ".".to_owned(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directives for the stderr layer. `RUST_LOG` takes precedence.
    pub console_level: String,
    /// Optional log file; relative paths are resolved against `home_dir`.
    pub file: Option<PathBuf>,
    pub file_level: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "warn".to_owned(),
            file: None,
            file_level: "info".to_owned(),
            json: false,
        }
    }
}

/// Flags that override the merged configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Loads defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    /// Fails when `path` is given but is not a file, or when a source holds
    /// a value of the wrong shape or an unknown key.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::Missing(path.display().to_string()));
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        figment.extract().map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if cli.mock {
            self.database.in_memory = true;
        }
        let level = match cli.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.console_level);
        }
    }

    /// The home directory with `~` expanded.
    ///
    /// # Errors
    /// Returns [`ConfigError::HomeMissing`] if `~` is used and no home
    /// directory can be determined.
    pub fn home_path(&self) -> Result<PathBuf, ConfigError> {
        expand_tilde(&self.home_dir)
    }

    /// # Errors
    /// Returns [`ConfigError::Render`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Render(e.to_string()))
    }
}

/// Expands a leading `~` or `~/` to the user's home directory.
///
/// # Errors
/// Returns [`ConfigError::HomeMissing`] if the home directory is unknown.
pub fn expand_tilde(raw: &str) -> Result<PathBuf, ConfigError> {
    if raw == "~" {
        return env::home_dir().ok_or(ConfigError::HomeMissing);
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        let home = env::home_dir().ok_or(ConfigError::HomeMissing)?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(raw))
}

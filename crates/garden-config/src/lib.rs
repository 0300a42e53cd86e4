//! # garden-config
//!
//! Layered configuration loading for the garden tracker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GARDEN_*` prefix, `__` as separator)
//! 2. Project-level `.garden/config.toml`
//! 3. User-level `~/.config/garden/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GARDEN_DATABASE__PATH` -> `database.path` and
//! `GARDEN_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`.
//!
//! # Usage
//!
//! ```no_run
//! use garden_config::GardenConfig;
//!
//! let config = GardenConfig::load_with_dotenv().expect("config");
//! println!("database at {}", config.database.path);
//! ```

mod database;
mod error;
mod general;

pub use database::{DatabaseConfig, PROJECT_DIR};
pub use error::ConfigError;
pub use general::{DEFAULT_LIST_LIMIT, GeneralConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GardenConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GardenConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed and
    /// `ConfigError::InvalidValue` if a value fails [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file, if one exists.
    ///
    /// Values already present in the environment are not overwritten.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GARDEN_").split("__"))
    }

    /// Reject values that would make every command fail later.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("garden").join("config.toml"))
    }

    /// Prefer `.garden/.env`, otherwise let dotenvy search the cwd and its parents.
    fn load_dotenv() {
        let project_env = PathBuf::from(PROJECT_DIR).join(".env");
        if project_env.is_file() && dotenvy::from_path(&project_env).is_ok() {
            return;
        }
        let _ = dotenvy::dotenv();
    }
}

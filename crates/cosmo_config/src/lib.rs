//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COSMO_*` prefix, `__` as separator)
//! 2. Project-level `./cosmo.toml`
//! 3. User-level `~/.config/cosmo/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `COSMO_COMPATIBILITY__SEED` -> `compatibility.seed`,
//! `COSMO_PROFILE__MAYAN_CATALOG` -> `profile.mayan_catalog`, etc.

mod error;
mod sections;

pub use error::ConfigError;
pub use sections::{CompatibilitySection, LoggingSection, ProfileSection};

use std::path::{Path, PathBuf};

use cosmo_compat::{MAX_BEST_MATCHES, MAX_CHALLENGING_MATCHES};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "COSMO_";

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "cosmo.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CosmoConfig {
    #[serde(default)]
    pub profile: ProfileSection,
    #[serde(default)]
    pub compatibility: CompatibilitySection,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl CosmoConfig {
    /// Load from all sources and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with a single TOML file, then validated.
    ///
    /// A missing file is an error here, unlike the implicit layers of
    /// [`load`](Self::load).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file not found: {}", path.display()),
            });
        }
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Build the provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cosmo").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_limit(
            "compatibility.best_limit",
            self.compatibility.best_limit,
            MAX_BEST_MATCHES,
        )?;
        check_limit(
            "compatibility.challenging_limit",
            self.compatibility.challenging_limit,
            MAX_CHALLENGING_MATCHES,
        )?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn check_limit(field: &str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value == 0 || value > max {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be between 1 and {max}, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CosmoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.compatibility.best_limit, 6);
    }

    #[test]
    fn zero_limit_rejected() {
        let mut config = CosmoConfig::default();
        config.compatibility.challenging_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("compatibility.challenging_limit"));
    }

    #[test]
    fn limits_above_maximum_rejected() {
        let mut config = CosmoConfig::default();
        config.compatibility.best_limit = 7;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("compatibility.best_limit"));

        let mut config = CosmoConfig::default();
        config.compatibility.challenging_limit = 5;
        assert!(config.validate().is_err());

        let mut config = CosmoConfig::default();
        config.compatibility.best_limit = 1;
        config.compatibility.challenging_limit = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_reported() {
        let err = CosmoConfig::from_file("/definitely/not/here/cosmo.toml").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}

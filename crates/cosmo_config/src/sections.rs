//! Configuration sections.

use cosmo_compat::{CompatibilityLimits, MAX_BEST_MATCHES, MAX_CHALLENGING_MATCHES};
use cosmo_zodiac::{MayanCatalog, ProfileOptions};
use serde::{Deserialize, Serialize};

const fn default_best_limit() -> usize {
    MAX_BEST_MATCHES
}

const fn default_challenging_limit() -> usize {
    MAX_CHALLENGING_MATCHES
}

fn default_level() -> String {
    "info".to_string()
}

/// Profile composition settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileSection {
    /// Mayan day-sign catalog: `tzolkin` (20 signs) or `abbreviated` (3).
    #[serde(default)]
    pub mayan_catalog: MayanCatalog,
}

impl ProfileSection {
    /// Options for the profile composer.
    pub const fn options(&self) -> ProfileOptions {
        ProfileOptions {
            mayan_catalog: self.mayan_catalog,
        }
    }
}

/// Compatibility engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompatibilitySection {
    /// Maximum best matches kept, 1 to 6.
    #[serde(default = "default_best_limit")]
    pub best_limit: usize,

    /// Maximum challenging matches kept, 1 to 4.
    #[serde(default = "default_challenging_limit")]
    pub challenging_limit: usize,

    /// Fixed generator seed. Unset means fresh randomness per call.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CompatibilitySection {
    /// Match-list caps for the engine.
    pub const fn limits(&self) -> CompatibilityLimits {
        CompatibilityLimits {
            best: self.best_limit,
            challenging: self.challenging_limit,
        }
    }
}

impl Default for CompatibilitySection {
    fn default() -> Self {
        Self {
            best_limit: default_best_limit(),
            challenging_limit: default_challenging_limit(),
            seed: None,
        }
    }
}

/// Logging settings for binaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSection {
    /// Default filter directive when `COSMO_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

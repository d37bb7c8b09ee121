//! Process-wide settings singleton.

use std::sync::OnceLock;

use cosmo_config::CosmoConfig;

use crate::error::CosmoError;

static CONFIG: OnceLock<CosmoConfig> = OnceLock::new();

/// Install the settings used by the convenience functions.
///
/// May be called once. Functions invoked before `init` use the defaults.
pub fn init(config: CosmoConfig) -> Result<(), CosmoError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| CosmoError::AlreadyInitialized)?;
    tracing::debug!("cosmo settings initialized");
    Ok(())
}

pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

/// Installed settings, or the defaults when [`init`] was never called.
pub fn config() -> &'static CosmoConfig {
    static DEFAULT: OnceLock<CosmoConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(CosmoConfig::default))
}

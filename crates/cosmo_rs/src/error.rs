//! Error type for the convenience wrapper.

use cosmo_calendar::CalendarError;
use cosmo_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CosmoError {
    /// The birth date (or another calendar input) failed to parse.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// [`init`](crate::init) was called more than once.
    #[error("cosmo settings already initialized")]
    AlreadyInitialized,
}

//! Error types for date and time parsing.

use thiserror::Error;

/// Errors raised at the text-parsing boundary.
///
/// This is the only validation gate of the engine: once a [`CalendarDate`]
/// exists, every downstream classifier is total.
///
/// [`CalendarDate`]: crate::CalendarDate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Text is neither `DD/MM/YYYY` nor ISO `YYYY-MM-DD`, or names a day
    /// that does not exist.
    #[error("invalid birth date format: {0:?} (use DD/MM/YYYY or YYYY-MM-DD)")]
    InvalidDateFormat(String),
    /// Text is not a 24-hour `HH:MM` or `HH:MM:SS` time.
    #[error("invalid birth time format: {0:?} (use HH:MM)")]
    InvalidTimeFormat(String),
}

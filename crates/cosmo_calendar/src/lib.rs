//! Calendar primitives for birth-date classification.
//!
//! This crate provides:
//! - `CalendarDate`, a validated proleptic-Gregorian date parsed from
//!   `DD/MM/YYYY` or ISO `YYYY-MM-DD` text
//! - `BirthTime`, an optional 24-hour time of birth
//! - Leap-year, day-of-year and civil day-count arithmetic
//! - `BirthRecord`, the `{name, birthDate, birthTime}` persistence record

pub mod birth_time;
pub mod date;
pub mod error;
pub mod record;

pub use birth_time::BirthTime;
pub use date::{CalendarDate, days_from_civil, days_in_month, days_in_year, is_leap_year};
pub use error::CalendarError;
pub use record::BirthRecord;

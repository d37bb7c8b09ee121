//! Proleptic-Gregorian calendar dates.
//!
//! Day counts are computed from civil fields alone, so day-of-year results
//! never depend on a local timezone or DST offset.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A validated calendar date.
///
/// Construct with [`CalendarDate::new`] or by parsing text; both reject
/// days that do not exist (e.g. 31 February). Deserialization goes through
/// the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawDate")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Unchecked wire form of [`CalendarDate`].
#[derive(Deserialize)]
struct RawDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

/// Gregorian leap-year rule: divisible by 4 and (not by 100, or by 400).
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given year (365 or 366).
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date (negative before the epoch).
///
/// Era-based algorithm over 400-year Gregorian cycles; valid for the full
/// `i32` year range.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

impl CalendarDate {
    /// Create a date, rejecting out-of-range months and days.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDateFormat(format!(
                "{day:02}/{month:02}/{year:04}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-12.
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month, 1-31.
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// 1-based day of the year (1 January = 1).
    pub fn day_of_year(&self) -> u32 {
        let start = days_from_civil(self.year, 1, 1);
        // A validated date lies within its year, so the offset is 0..=365.
        (days_from_civil(self.year, self.month, self.day) - start) as u32 + 1
    }

    /// Whether this date falls in a leap year.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// `DD/MM/YYYY` rendering, the form most users type.
    pub fn to_dmy_string(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parse `D/M/YYYY`, `DD/MM/YYYY` or ISO `YYYY-MM-DD`.
    ///
    /// An ISO date may carry a trailing `T...` time component, which is
    /// discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parsed = if text.contains('/') {
            parse_dmy(text)
        } else {
            parse_iso(text)
        };
        parsed.ok_or_else(|| CalendarError::InvalidDateFormat(s.to_string()))
    }
}

fn parse_dmy(text: &str) -> Option<CalendarDate> {
    let mut fields = text.split('/');
    let day = digits(fields.next()?, 1, 2)?;
    let month = digits(fields.next()?, 1, 2)?;
    let year = digits(fields.next()?, 4, 4)?;
    if fields.next().is_some() {
        return None;
    }
    CalendarDate::new(year as i32, month, day).ok()
}

fn parse_iso(text: &str) -> Option<CalendarDate> {
    let date_part = match text.split_once('T') {
        Some((date, _time)) => date,
        None => text,
    };
    let mut fields = date_part.split('-');
    let year = digits(fields.next()?, 4, 4)?;
    let month = digits(fields.next()?, 2, 2)?;
    let day = digits(fields.next()?, 2, 2)?;
    if fields.next().is_some() {
        return None;
    }
    CalendarDate::new(year as i32, month, day).ok()
}

/// Parse an all-ASCII-digit field whose length lies in `[min_len, max_len]`.
fn digits(field: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if field.len() < min_len || field.len() > max_len {
        return None;
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(2100), 365);
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 1, 1), 10_957);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
    }

    #[test]
    fn day_of_year_across_leap_february() {
        let d = CalendarDate::new(2000, 3, 21).unwrap();
        assert_eq!(d.day_of_year(), 81);
        let d = CalendarDate::new(2001, 3, 21).unwrap();
        assert_eq!(d.day_of_year(), 80);
        let d = CalendarDate::new(2000, 12, 31).unwrap();
        assert_eq!(d.day_of_year(), 366);
    }

    #[test]
    fn new_rejects_impossible_days() {
        assert!(CalendarDate::new(2000, 2, 30).is_err());
        assert!(CalendarDate::new(2001, 2, 29).is_err());
        assert!(CalendarDate::new(2000, 0, 1).is_err());
        assert!(CalendarDate::new(2000, 4, 31).is_err());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn parse_dmy_and_iso_agree() {
        let a: CalendarDate = "31/03/1981".parse().unwrap();
        let b: CalendarDate = "1981-03-31".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, CalendarDate::new(1981, 3, 31).unwrap());
    }

    #[test]
    fn parse_accepts_short_dmy_fields() {
        let d: CalendarDate = "1/2/1990".parse().unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (1, 2, 1990));
    }

    #[test]
    fn parse_iso_with_time_suffix() {
        let d: CalendarDate = "2000-03-21T00:00:00.000Z".parse().unwrap();
        assert_eq!(d, CalendarDate::new(2000, 3, 21).unwrap());
    }

    #[test]
    fn parse_trims_whitespace() {
        let d: CalendarDate = "  21/03/2000 \n".parse().unwrap();
        assert_eq!(d.day_of_year(), 81);
    }

    #[test]
    fn parse_rejects_garbage() {
        for text in [
            "not-a-date",
            "",
            "31/02/2000",
            "2001-02-29",
            "21/03/00",
            "2000-3-21",
            "21/03/2000/1",
            "2000-03-21-01",
            "aa/bb/cccc",
            "+1/03/2000",
        ] {
            let err = text.parse::<CalendarDate>().unwrap_err();
            assert_eq!(err, CalendarError::InvalidDateFormat(text.to_string()), "{text}");
        }
    }

    #[test]
    fn deserialize_validates() {
        let d: CalendarDate =
            serde_json::from_str(r#"{"year":2000,"month":2,"day":29}"#).unwrap();
        assert_eq!(d, CalendarDate::new(2000, 2, 29).unwrap());
        assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"year":2000,"month":2,"day":29}"#);

        for bad in [
            r#"{"year":2001,"month":2,"day":31}"#,
            r#"{"year":2001,"month":2,"day":29}"#,
            r#"{"year":2000,"month":0,"day":0}"#,
            r#"{"year":2000,"month":13,"day":1}"#,
        ] {
            assert!(serde_json::from_str::<CalendarDate>(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn display_forms() {
        let d = CalendarDate::new(1981, 3, 31).unwrap();
        assert_eq!(d.to_string(), "1981-03-31");
        assert_eq!(d.to_dmy_string(), "31/03/1981");
    }
}

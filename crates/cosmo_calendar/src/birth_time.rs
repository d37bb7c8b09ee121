//! Optional 24-hour time of birth.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Wall-clock time of birth, 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTime")]
pub struct BirthTime {
    hour: u32,
    minute: u32,
    second: u32,
}

#[derive(Deserialize)]
struct RawTime {
    hour: u32,
    minute: u32,
    #[serde(default)]
    second: u32,
}

impl TryFrom<RawTime> for BirthTime {
    type Error = CalendarError;

    fn try_from(raw: RawTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute, raw.second)
    }
}

impl BirthTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CalendarError::InvalidTimeFormat(format!(
                "{hour:02}:{minute:02}:{second:02}"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    pub const fn second(&self) -> u32 {
        self.second
    }
}

impl Display for BirthTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.second == 0 {
            write!(f, "{:02}:{:02}", self.hour, self.minute)
        } else {
            write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
        }
    }
}

impl FromStr for BirthTime {
    type Err = CalendarError;

    /// Parse `H:MM`, `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidTimeFormat(s.to_string());
        let mut fields = s.trim().split(':');
        let hour = field(fields.next(), 1).ok_or_else(invalid)?;
        let minute = field(fields.next(), 2).ok_or_else(invalid)?;
        let second = match fields.next() {
            Some(text) => field(Some(text), 2).ok_or_else(invalid)?,
            None => 0,
        };
        if fields.next().is_some() {
            return Err(invalid());
        }
        Self::new(hour, minute, second).map_err(|_| invalid())
    }
}

fn field(text: Option<&str>, min_len: usize) -> Option<u32> {
    let text = text?;
    if text.len() < min_len || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hh_mm() {
        let t: BirthTime = "07:45".parse().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (7, 45, 0));
        assert_eq!(t.to_string(), "07:45");
    }

    #[test]
    fn parse_with_seconds() {
        let t: BirthTime = "23:59:30".parse().unwrap();
        assert_eq!(t.second(), 30);
        assert_eq!(t.to_string(), "23:59:30");
    }

    #[test]
    fn parse_single_digit_hour() {
        let t: BirthTime = "9:05".parse().unwrap();
        assert_eq!(t.hour(), 9);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for text in ["24:00", "12:60", "12:5", "noon", "12", "12:00:00:00", ""] {
            assert_eq!(
                text.parse::<BirthTime>(),
                Err(CalendarError::InvalidTimeFormat(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn deserialize_validates() {
        let t: BirthTime = serde_json::from_str(r#"{"hour":6,"minute":30}"#).unwrap();
        assert_eq!(t, BirthTime::new(6, 30, 0).unwrap());
        assert!(serde_json::from_str::<BirthTime>(r#"{"hour":25,"minute":0}"#).is_err());
    }
}

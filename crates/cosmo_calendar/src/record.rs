//! The `{name, birthDate, birthTime}` record exchanged with persistence.
//!
//! Storage keeps the raw text as entered; parsing happens on demand so a
//! record written by an older client still round-trips unchanged.

use serde::{Deserialize, Serialize};

use crate::birth_time::BirthTime;
use crate::date::CalendarDate;
use crate::error::CalendarError;

/// A person's stored birth data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
}

impl BirthRecord {
    pub fn new(name: Option<String>, birth_date: String, birth_time: Option<String>) -> Self {
        Self {
            name,
            birth_date,
            birth_time,
        }
    }

    /// Parse the stored birth date.
    pub fn date(&self) -> Result<CalendarDate, CalendarError> {
        self.birth_date.parse()
    }

    /// Parse the stored birth time, if any. Empty text counts as absent.
    pub fn time(&self) -> Result<Option<BirthTime>, CalendarError> {
        match self.birth_time.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => text.parse().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case() {
        let record = BirthRecord::new(
            Some("Ada".into()),
            "10/12/1815".into(),
            Some("06:30".into()),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"birthDate\":\"10/12/1815\""), "{json}");
        assert!(json.contains("\"birthTime\":\"06:30\""), "{json}");
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let record: BirthRecord = serde_json::from_str(r#"{"birthDate":"2000-03-21"}"#).unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.time(), Ok(None));
        assert_eq!(record.date().unwrap().day_of_year(), 81);
    }

    #[test]
    fn blank_time_is_absent() {
        let record = BirthRecord::new(None, "2000-03-21".into(), Some("  ".into()));
        assert_eq!(record.time(), Ok(None));
    }
}

//! Date-only calendar values as they travel over the wire.
//!
//! The REST API sends `YYYY-MM-DD`. Some endpoints and edit forms hand back a
//! timestamp (`YYYY-MM-DDTHH:MM:SS`); only the date part is kept. Anything that
//! does not parse to a real calendar date is rejected with
//! [`PantryError::InvalidDate`] instead of flowing through as a sentinel.

use crate::error::{PantryError, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Wire format for item dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a pantry date string.
pub fn parse_item_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PantryError::invalid_date(value, "date is empty"));
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|e| PantryError::invalid_date(value, e.to_string()))
}

/// Format a date the way the API expects it.
#[must_use]
pub fn format_item_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Midnight UTC of the given date, the instant a date-only string denotes.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Serde adapter for required item dates.
pub mod item_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_item_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_item_date(&raw).map_err(serde::de::Error::custom)
    }

    /// Serde adapter for optional item dates (`null`, missing and `""` are `None`).
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => serializer.serialize_str(&super::super::format_item_date(*d)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(s) => super::super::parse_item_date(s)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }
    }
}

//! Calendar-date helpers for leave requests.
//!
//! The backend exchanges dates as `YYYY-MM-DD`, but some responses carry
//! full ISO timestamps (`1990-01-01T00:00:00`). Only the date part matters.

use time::Date;
use time::error::{Parse, TryFromParsed};
use time::macros::format_description;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    Format(String),
    #[error("invalid date `{input}`: {reason}")]
    Range { input: String, reason: String },
    #[error("cannot render date: {0}")]
    Render(String),
}

/// Date part of a string that may be a full ISO timestamp.
#[must_use]
pub fn date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or_default()
}

/// Render a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`DateError::Render`] if `time` cannot format the date.
pub fn format_date(date: Date) -> Result<String, DateError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| DateError::Render(e.to_string()))
}

/// Parse zero-padded `YYYY-MM-DD` (a trailing `T...` time part is ignored).
///
/// # Errors
///
/// Returns [`DateError`] when the shape is wrong or the date does not exist.
pub fn parse_date(raw: &str) -> Result<Date, DateError> {
    let part = date_part(raw.trim());
    Date::parse(part, format_description!("[year]-[month]-[day]")).map_err(|e| match e {
        Parse::TryFromParsed(TryFromParsed::ComponentRange(range)) => {
            DateError::Range { input: raw.to_owned(), reason: range.to_string() }
        }
        _ => DateError::Format(raw.to_owned()),
    })
}

/// `#[serde(with = "...")]` adapter serializing [`Date`] as `YYYY-MM-DD`.
pub mod serde_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let rendered = super::format_date(*date).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&rendered)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "date_test.rs"]
mod tests;

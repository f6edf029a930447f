//! Normalization of the date encodings accepted by `from`, `to` and `expire_by` parameters.

use crate::Error;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::time::SystemTime;

/// A point in time, as accepted by the RazorpayX client.
///
/// Every variant is turned into Unix seconds before a request leaves the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Unix timestamp in seconds. Sent as is: millisecond timestamps are not detected.
    Timestamp(i64),
    /// A date string such as `2021-10-28T10:00:00Z`, `2021-10-28` or `Oct 28, 2021`.
    Text(String),
    DateTime(DateTime<Utc>),
}

impl DateInput {
    /// Returns the Unix timestamp in seconds represented by this input.
    ///
    /// Strings that cannot be parsed fail with [`Error::Validation`].
    pub fn to_unix_seconds(&self) -> Result<i64, Error> {
        match self {
            DateInput::Timestamp(seconds) => Ok(*seconds),
            DateInput::DateTime(date_time) => Ok(date_time.timestamp()),
            DateInput::Text(text) => parse_date(text)
                .map(|date_time| date_time.timestamp())
                .ok_or_else(|| Error::Validation(format!("`{}` is not a valid date", text))),
        }
    }
}

/// Converts any accepted date encoding into Unix seconds.
pub fn normalize_date(input: impl Into<DateInput>) -> Result<i64, Error> {
    input.into().to_unix_seconds()
}

/// Date-only formats are read as midnight UTC.
fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.with_timezone(&Utc));
    }

    if let Ok(date_time) = DateTime::parse_from_rfc2822(text) {
        return Some(date_time.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    for format in ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"] {
        if let Some(naive) = NaiveDate::parse_from_str(text, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    None
}

impl From<i64> for DateInput {
    fn from(seconds: i64) -> Self {
        DateInput::Timestamp(seconds)
    }
}

impl From<i32> for DateInput {
    fn from(seconds: i32) -> Self {
        DateInput::Timestamp(i64::from(seconds))
    }
}

impl From<u32> for DateInput {
    fn from(seconds: u32) -> Self {
        DateInput::Timestamp(i64::from(seconds))
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(date_time: DateTime<Tz>) -> Self {
        DateInput::DateTime(date_time.with_timezone(&Utc))
    }
}

impl From<SystemTime> for DateInput {
    fn from(time: SystemTime) -> Self {
        DateInput::DateTime(time.into())
    }
}

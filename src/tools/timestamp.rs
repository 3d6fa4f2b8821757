// src/tools/timestamp.rs
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::utils::format_relative;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

pub type Result<T> = std::result::Result<T, TimestampError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimestampInfo {
    /// Unix time in seconds
    pub unix: i64,
    /// Unix time in milliseconds
    pub milliseconds: i64,
    /// RFC 3339, e.g. `2021-01-01T00:00:00.000Z`
    pub iso: String,
    /// RFC 7231, e.g. `Fri, 01 Jan 2021 00:00:00 GMT`
    pub utc: String,
    /// Host local time, `YYYY-MM-DD HH:MM:SS`
    pub local: String,
    /// e.g. "3 days ago"
    pub relative: String,
}

fn describe(time: DateTime<Utc>, now: DateTime<Utc>) -> TimestampInfo {
    TimestampInfo {
        unix: time.timestamp(),
        milliseconds: time.timestamp_millis(),
        iso: time.to_rfc3339_opts(SecondsFormat::Millis, true),
        utc: time.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        local: time.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        relative: format_relative(time, now),
    }
}

/// Interpret up to 10 digits as seconds and anything longer as milliseconds.
pub fn from_timestamp(input: &str, now: DateTime<Utc>) -> Result<TimestampInfo> {
    let trimmed = input.trim();
    let invalid = || TimestampError::InvalidTimestamp(input.to_string());

    let value: i64 = trimmed.parse().map_err(|_| invalid())?;
    let digits = trimmed.trim_start_matches('-').len();
    let seconds = if digits <= 10 { value } else { value.div_euclid(1000) };

    let time = Utc.timestamp_opt(seconds, 0).single().ok_or_else(invalid)?;
    Ok(describe(time, now))
}

/// Convert a `YYYY-MM-DD` date and `HH:MM` time, read as UTC or host local time.
pub fn from_datetime(date: &str, time: &str, utc: bool, now: DateTime<Utc>) -> Result<TimestampInfo> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| TimestampError::InvalidDateTime(format!("date '{}': {}", date, e)))?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|e| TimestampError::InvalidDateTime(format!("time '{}': {}", time, e)))?;
    let naive = NaiveDateTime::new(date, time);

    let instant = if utc {
        Utc.from_utc_datetime(&naive)
    } else {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| TimestampError::InvalidDateTime(format!("{} does not exist in the local time zone", naive)))?
            .with_timezone(&Utc)
    };

    Ok(describe(instant, now))
}

// src/utils/format.rs
use chrono::{DateTime, Utc};

fn unit(count: i64, name: &str) -> String {
    format!("{} {}{}", count, name, if count == 1 { "" } else { "s" })
}

/// Describe `time` relative to `now`, e.g. "3 hours ago" or "2 days from now".
///
/// Months are 30 days and years 365 days.
pub fn format_relative(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(time).num_seconds();
    let future = seconds < 0;
    let seconds = seconds.abs();

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let phrase = if seconds < 60 {
        return "just now".to_string();
    } else if minutes < 60 {
        unit(minutes, "minute")
    } else if hours < 24 {
        unit(hours, "hour")
    } else if days < 30 {
        unit(days, "day")
    } else if days < 365 {
        unit(days / 30, "month")
    } else {
        unit(days / 365, "year")
    };

    if future {
        format!("{} from now", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

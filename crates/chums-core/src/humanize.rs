//! Duration Humanizer
//!
//! Compact "time since" text for list rows. Recomputed at render time.

use chrono::{DateTime, NaiveDateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Elapsed time from `from` to `now` as `Ns`, `Nm`, `Nh` or `Nd`
pub fn display_duration(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - from).num_seconds().max(0);
    if seconds >= DAY {
        format!("{}d", seconds / DAY)
    } else if seconds >= HOUR {
        format!("{}h", seconds / HOUR)
    } else if seconds >= MINUTE {
        format!("{}m", seconds / MINUTE)
    } else {
        format!("{}s", seconds)
    }
}

/// Parse the timestamp shapes the APIs send. Offset-less values are UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

/// `display_duration` for a raw server timestamp; empty when unparseable
pub fn since(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    timestamp
        .and_then(parse_timestamp)
        .map(|from| display_duration(from, now))
        .unwrap_or_default()
}

use chrono::{DateTime, NaiveDateTime, Utc};
use crate::Error;

const TWITCH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a Twitch API timestamp into UTC.
///
/// Twitch sends both `2016-12-14T22:49:56Z` and `2013-06-03T19:12:02.580593Z`;
/// fractional seconds are dropped.
pub fn parse_twitch_time(raw: &str) -> Result<DateTime<Utc>, Error> {
    let trimmed = raw.trim().trim_end_matches('Z');
    let whole_seconds = trimmed
        .split_once('.')
        .map(|(seconds, _)| seconds)
        .unwrap_or(trimmed);
    let naive = NaiveDateTime::parse_from_str(whole_seconds, TWITCH_TIME_FORMAT)?;
    Ok(naive.and_utc())
}

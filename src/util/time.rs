//! Timestamp normalisation and wall-clock formatting for chat lines.
//!
//! DESIGN
//! ======
//! Server timestamps arrive as ISO-8601 strings that may omit the zone
//! designator; those are interpreted as UTC. Anything absent or unparseable
//! collapses to "now" so rendering never fails on a bad timestamp.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Resolve an optional wire timestamp to an instant, defaulting to now.
pub fn normalize_timestamp(input: Option<&str>) -> DateTime<Utc> {
    normalize_timestamp_at(input, Utc::now())
}

/// Same as [`normalize_timestamp`] with an injected notion of "now".
pub fn normalize_timestamp_at(input: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return now;
    };

    if has_zone_marker(raw) {
        parse_zoned(raw).unwrap_or(now)
    } else {
        parse_zoned(&format!("{raw}Z"))
            .or_else(|| parse_naive_utc(raw))
            .unwrap_or(now)
    }
}

/// Render an instant as zero-padded local `HH:MM:SS`.
pub fn format_clock(instant: DateTime<Utc>) -> String {
    format_clock_in(instant, &Local)
}

/// Render an instant as `HH:MM:SS` in an explicit time zone.
pub fn format_clock_in<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format("%H:%M:%S").to_string()
}

/// `true` when the string carries `Z`/`z` or ends in a `+HH:MM` / `-HHMM` offset.
fn has_zone_marker(raw: &str) -> bool {
    if raw.contains(['z', 'Z']) {
        return true;
    }
    let bytes = raw.as_bytes();
    let tail_matches = |len: usize, colon: bool| {
        if bytes.len() < len {
            return false;
        }
        let tail = &bytes[bytes.len() - len..];
        if tail[0] != b'+' && tail[0] != b'-' {
            return false;
        }
        if colon {
            tail[3] == b':' && [1, 2, 4, 5].iter().all(|&i| tail[i].is_ascii_digit())
        } else {
            tail[1..].iter().all(u8::is_ascii_digit)
        }
    };
    tail_matches(6, true) || tail_matches(5, false)
}

fn parse_zoned(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"]
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn parse_naive_utc(raw: &str) -> Option<DateTime<Utc>> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

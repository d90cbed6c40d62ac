//! Datetime serialization/deserialization helpers.
//!
//! Provides custom Serde serialization/deserialization support:
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: compact `YYYYMMDDHHMM` (number or string), RFC3339 string,
//!   or Unix timestamp -> `DateTime<Utc>`
//!
//! The helpdesk backend stores article edit dates in the compact form, e.g. `201604161427`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Display format used for "last edited" lines.
const DISPLAY_FORMAT: &str = "%d %b %Y";

/// Compact backend format (`YYYYMMDDHHMM`).
const COMPACT_FORMAT: &str = "%Y%m%d%H%M";

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from the compact backend format, RFC3339 or a Unix timestamp.
///
/// Unix timestamps are auto-detected as seconds or milliseconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampOrString {
        String(String),
        I64(i64),
        U64(u64),
    }

    match TimestampOrString::deserialize(deserializer)? {
        TimestampOrString::String(s) => parse_str(&s)
            .ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}"))),
        TimestampOrString::I64(ts) => {
            parse_number(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
        TimestampOrString::U64(ts) => i64::try_from(ts)
            .ok()
            .and_then(parse_number)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
    }
}

/// Formats a timestamp for display, e.g. `16 Apr 2016`.
pub fn to_display_string(dt: &DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Parses the compact `YYYYMMDDHHMM` form.
pub fn parse_compact(s: &str) -> Option<DateTime<Utc>> {
    if s.len() != 12 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, COMPACT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn parse_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Some(dt) = parse_compact(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    s.parse::<i64>().ok().and_then(parse_unix_timestamp)
}

fn parse_number(ts: i64) -> Option<DateTime<Utc>> {
    // 12-digit values are compact dates before they are millisecond timestamps
    parse_compact(&ts.to_string()).or_else(|| parse_unix_timestamp(ts))
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize")]
        at: DateTime<Utc>,
    }

    fn parse(json: &str) -> DateTime<Utc> {
        serde_json::from_str::<Wrapper>(json).unwrap().at
    }

    #[test]
    fn compact_number_and_string() {
        let expected = Utc.with_ymd_and_hms(2016, 4, 16, 14, 27, 0).unwrap();
        assert_eq!(parse(r#"{"at": 201604161427}"#), expected);
        assert_eq!(parse(r#"{"at": "201604161427"}"#), expected);
    }

    #[test]
    fn rfc3339_and_unix() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(parse(r#"{"at": "2024-01-02T03:04:05Z"}"#), expected);
        assert_eq!(parse(r#"{"at": 1704164645}"#), expected);
        assert_eq!(parse(r#"{"at": 1704164645000}"#), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"at": "yesterday"}"#).is_err());
    }

    #[test]
    fn compact_rejects_invalid_month() {
        assert!(parse_compact("201613011200").is_none());
    }

    #[test]
    fn display_string() {
        let dt = Utc.with_ymd_and_hms(2016, 4, 6, 14, 27, 0).unwrap();
        assert_eq!(to_display_string(&dt), "06 Apr 2016");
    }
}

//! Lenient serde helpers for ledger timestamps
//!
//! Records written by older UI builds carry `lastUpdate` as local
//! `YYYY-MM-DD HH:mm` and sometimes leave `createdDate` empty. One odd value
//! must not make the whole ledger unreadable, so these helpers accept every
//! known format and fall back to the default for anything else.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a stored timestamp: RFC 3339, local wall-clock time, or a bare date
/// (local midnight)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    let naive = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| parse_date(raw).and_then(|date| date.and_hms_opt(0, 0, 0)))?;

    Some(
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
    )
}

/// Parse a stored calendar date, taking the date part of a timestamp
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|parsed| parsed.date_naive())
        })
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|naive| naive.date())
        })
}

/// Deserialize `lastUpdate`, defaulting when missing or unparseable
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_timestamp)
        .unwrap_or_default())
}

/// Deserialize `createdDate`, defaulting when missing or unparseable
pub fn lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_date)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp("2025-01-10T14:30:00Z").unwrap();
        assert_eq!(rfc.to_rfc3339(), "2025-01-10T14:30:00+00:00");

        let wall = parse_timestamp("2025-01-10 14:30").unwrap();
        let local = wall.with_timezone(&Local).naive_local();
        assert_eq!(local.date(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!((local.hour(), local.minute()), (14, 30));

        assert!(parse_timestamp("2025-01-10").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 10);
        assert_eq!(parse_date("2025-01-10"), expected);
        assert_eq!(parse_date("2025/01/10"), expected);
        assert_eq!(parse_date("2025-01-10T08:00:00+08:00"), expected);
        assert_eq!(parse_date("2025-01-10 14:30"), expected);
        assert_eq!(parse_date(""), None);
    }
}

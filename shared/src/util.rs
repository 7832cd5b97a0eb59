//! Helpers for loosely typed API fields
//!
//! The moderation API echoes back whatever the submission form sent, so
//! numeric columns may arrive as JSON numbers or as numeric strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Unsigned(u64),
    Float(f64),
    Text(String),
}

/// Deserialize an optional float that may be encoded as a string.
///
/// Blank or unparsable strings become `None` rather than an error.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        None => None,
        Some(NumberOrText::Unsigned(v)) => Some(v as f64),
        Some(NumberOrText::Float(v)) => Some(v),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
    })
}

/// Deserialize an optional count that may be encoded as a string or float.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        None => None,
        Some(NumberOrText::Unsigned(v)) => Some(v),
        Some(NumberOrText::Float(v)) if v >= 0.0 && v.fract() == 0.0 => Some(v as u64),
        Some(NumberOrText::Float(_)) => None,
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
    })
}

/// Calendar day (UTC) of an API timestamp.
///
/// Accepts RFC 3339 (`2024-09-01T10:20:30.000Z`), naive datetimes and bare
/// `YYYY-MM-DD` dates.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.date());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_f64")]
        rating: Option<f64>,
        #[serde(default, deserialize_with = "lenient_u64")]
        views: Option<u64>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_and_strings() {
        let r = row(r#"{"rating": 4.5, "views": 1200}"#);
        assert_eq!(r.rating, Some(4.5));
        assert_eq!(r.views, Some(1200));

        let r = row(r#"{"rating": "3.9", "views": "87"}"#);
        assert_eq!(r.rating, Some(3.9));
        assert_eq!(r.views, Some(87));

        let r = row(r#"{"rating": 4, "views": 10.0}"#);
        assert_eq!(r.rating, Some(4.0));
        assert_eq!(r.views, Some(10));
    }

    #[test]
    fn test_missing_blank_and_garbage() {
        let r = row("{}");
        assert_eq!(r.rating, None);
        assert_eq!(r.views, None);

        let r = row(r#"{"rating": null, "views": ""}"#);
        assert_eq!(r.rating, None);
        assert_eq!(r.views, None);

        let r = row(r#"{"rating": "n/a", "views": -3}"#);
        assert_eq!(r.rating, None);
        assert_eq!(r.views, None);
    }

    #[test]
    fn test_parse_day() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(parse_day("2024-09-01T10:20:30.000Z"), Some(day));
        assert_eq!(parse_day("2024-09-01T23:30:00-02:00"), NaiveDate::from_ymd_opt(2024, 9, 2));
        assert_eq!(parse_day("2024-09-01T10:20:30"), Some(day));
        assert_eq!(parse_day("2024-09-01 10:20:30"), Some(day));
        assert_eq!(parse_day("2024-09-01"), Some(day));
        assert_eq!(parse_day("yesterday"), None);
        assert_eq!(parse_day(""), None);
    }
}

//! Calendar dates on the wire
//!
//! The sales API is not consistent about date formats: some endpoints return
//! `YYYY-MM-DD`, others an HTTP date (`Fri, 15 Mar 2024 00:00:00 GMT`) or a
//! full RFC 3339 timestamp. Everything is read into a `NaiveDate` and written
//! back as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    // "2024-03-15T14:02:26" without an offset
    raw.split('T')
        .next()
        .and_then(|d| NaiveDate::parse_from_str(d, WIRE_DATE_FORMAT).ok())
}

pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.format(WIRE_DATE_FORMAT).to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_wire_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_backend_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_wire_date("2024-03-15"), Some(expected));
        assert_eq!(parse_wire_date("Fri, 15 Mar 2024 00:00:00 GMT"), Some(expected));
        assert_eq!(parse_wire_date("2024-03-15T14:02:26Z"), Some(expected));
        assert_eq!(parse_wire_date("2024-03-15T14:02:26"), Some(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_wire_date("yesterday"), None);
        assert_eq!(parse_wire_date(""), None);
    }
}

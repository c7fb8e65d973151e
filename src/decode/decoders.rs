//! Decoder implementations
//!
//! Field decoders used by record structs through
//! `#[serde(default, deserialize_with = "...")]`, plus record extraction from
//! list payloads. Malformed dates and decimals decode to `None` rather than
//! failing the whole record.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;
use tracing::debug;

/// Keys of a legacy list payload that carry pagination metadata
pub const PAGINATION_KEYS: &[&str] = &[
    "end",
    "first_page_uri",
    "last_page_uri",
    "next_page_uri",
    "num_pages",
    "page",
    "page_size",
    "previous_page_uri",
    "start",
    "total",
    "uri",
];

// ============================================================================
// Parsers
// ============================================================================

/// Parse an RFC 2822 date-time (`Tue, 18 Aug 2015 17:07:30 +0000`)
pub fn parse_rfc2822_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse an ISO 8601 date-time (`2015-07-30T20:00:00Z`)
pub fn parse_iso8601_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Some products omit the offset; those timestamps are UTC
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse an ISO 8601 date (`2015-07-30`), accepting a full date-time too
pub fn parse_iso8601_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_iso8601_datetime(s).map(|dt| dt.date_naive()))
        .or_else(|| parse_rfc2822_datetime(s).map(|dt| dt.date_naive()))
}

/// Parse a decimal from its string or numeric JSON form
pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s.trim())
            .or_else(|_| Decimal::from_scientific(s.trim()))
            .ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        _ => None,
    }
}

// ============================================================================
// Serde field decoders
// ============================================================================

fn lenient<'de, D, T>(
    deserializer: D,
    kind: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            let parsed = parse(&s);
            if parsed.is_none() && !s.is_empty() {
                debug!("Ignoring malformed {} value: {}", kind, s);
            }
            parsed
        }
        Some(other) => {
            debug!("Ignoring malformed {} value: {}", kind, other);
            None
        }
    })
}

/// RFC 2822 date-time field decoder
pub mod rfc2822 {
    use super::*;

    /// Decode an optional RFC 2822 date-time
    pub fn option<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient(deserializer, "RFC 2822 date-time", parse_rfc2822_datetime)
    }
}

/// ISO 8601 date-time field decoder
pub mod iso8601 {
    use super::*;

    /// Decode an optional ISO 8601 date-time
    pub fn option<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient(deserializer, "ISO 8601 date-time", parse_iso8601_datetime)
    }
}

/// ISO 8601 date field decoder
pub mod iso8601_date {
    use super::*;

    /// Decode an optional ISO 8601 date
    pub fn option<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient(deserializer, "ISO 8601 date", parse_iso8601_date)
    }
}

/// Decimal field decoder
pub mod decimal {
    use super::*;

    /// Decode an optional decimal given as a string or a number
    pub fn option<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(parse_decimal))
    }
}

// ============================================================================
// Records
// ============================================================================

/// Decode one raw record into its typed form
pub fn decode_record<R: DeserializeOwned>(payload: &Value) -> Result<R> {
    R::deserialize(payload).map_err(|e| Error::decode(format!("Failed to decode record: {e}")))
}

/// Locate the record array of a list payload.
///
/// Payloads with a `meta.key` name the array explicitly. Legacy payloads hold
/// it under a non-pagination key. Without the `preserve_order` feature
/// `serde_json::Map` keeps keys sorted, so when several arrays are present the
/// alphabetically first one wins, not the first in the payload.
pub fn extract_records(payload: &Value) -> Result<&[Value]> {
    let object = payload
        .as_object()
        .ok_or_else(|| Error::decode("Page payload is not a JSON object"))?;

    if let Some(key) = payload
        .get("meta")
        .and_then(|meta| meta.get("key"))
        .and_then(Value::as_str)
    {
        return object
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::decode(format!("Page records not found under key '{key}'")));
    }

    object
        .iter()
        .filter(|(key, _)| key.as_str() != "meta" && !PAGINATION_KEYS.contains(&key.as_str()))
        .find_map(|(_, value)| value.as_array())
        .map(Vec::as_slice)
        .ok_or_else(|| Error::decode("Page records cannot be deserialized"))
}

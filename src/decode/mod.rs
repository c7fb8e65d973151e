//! Response decoder module
//!
//! Field decoders for the date-time, date and decimal encodings the API uses,
//! and record extraction from list payloads.

mod decoders;

pub use decoders::{
    decimal, decode_record, extract_records, iso8601, iso8601_date, parse_decimal,
    parse_iso8601_date, parse_iso8601_datetime, parse_rfc2822_datetime, rfc2822,
    PAGINATION_KEYS,
};

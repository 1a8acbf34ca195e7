//! Boolean field predicates — pure logic, no engine dependencies.
//!
//! Each predicate takes the candidate field's string form and returns
//! pass/fail. Parse failures are absorbed into `false`, never propagated.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;

/// Anchored integer pattern. Leading zeros are rejected except the literal `0`.
pub const INT_PATTERN: &str = r"^(?:[-+]?(?:0|[1-9][0-9]*))$";

/// Anchored float pattern: optional sign and integer part, optional fraction,
/// optional exponent.
pub const FLOAT_PATTERN: &str = r"^(?:[-+]?(?:[0-9]+))?(?:\.[0-9]*)?(?:[eE][+\-]?(?:[0-9]+))?$";

/// Date pattern. Deliberately unanchored: any string containing a
/// date-shaped substring passes.
pub const DATE_PATTERN: &str = r"\d{4}-\d{2}-\d{2}";

/// `chrono` format for an RFC 3339 timestamp with the zone offset omitted.
pub const RFC3339_WITHOUT_ZONE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static RX_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INT_PATTERN).expect("failed to compile the integer pattern"));
static RX_FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FLOAT_PATTERN).expect("failed to compile the float pattern"));
static RX_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("failed to compile the date pattern"));

/// Check whether the string is empty.
pub fn is_null(s: &str) -> bool {
    s.is_empty()
}

/// Check whether the string parses as a zone-less timestamp under the given
/// `chrono` format string.
pub fn is_time(s: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(s, format).is_ok()
}

/// Check whether the string is a base-10 integer. Empty string fails.
pub fn is_int(s: &str) -> bool {
    !is_null(s) && RX_INT.is_match(s)
}

/// Check whether the string is a float. Empty string fails.
pub fn is_float(s: &str) -> bool {
    !is_null(s) && RX_FLOAT.is_match(s)
}

/// Check whether the string contains a `YYYY-MM-DD` shaped substring.
/// Empty string fails.
pub fn is_date(s: &str) -> bool {
    !is_null(s) && RX_DATE.is_match(s)
}

/// Check whether the string is a valid RFC 3339 timestamp, zone included.
pub fn is_rfc3339(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
}

/// Check whether the string is a valid RFC 3339 timestamp with the zone
/// offset omitted (`YYYY-MM-DDTHH:MM:SS`).
pub fn is_rfc3339_without_zone(s: &str) -> bool {
    is_time(s, RFC3339_WITHOUT_ZONE_FORMAT)
}

/// Check whether the string is a timestamp in either RFC 3339 form,
/// with or without a zone offset.
pub fn is_datetime(s: &str) -> bool {
    is_rfc3339(s) || is_rfc3339_without_zone(s)
}

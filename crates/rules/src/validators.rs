//! Adapters binding the predicates to the `validator` derive engine.
//!
//! Each function is usable as `#[validate(custom(function = ...))]` and
//! reports the rule name as the error code, leaving message formatting and
//! aggregation to the engine.

use std::borrow::Cow;

use validator::ValidationError;

use crate::nullable::NullableValue;
use crate::predicates;

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Validates that a string is a base-10 integer without leading zeros.
pub fn int(value: &str) -> Result<(), ValidationError> {
    if predicates::is_int(value) {
        Ok(())
    } else {
        Err(rule_error("int", "must be an integer"))
    }
}

/// Validates that a string is a float.
pub fn float(value: &str) -> Result<(), ValidationError> {
    if predicates::is_float(value) {
        Ok(())
    } else {
        Err(rule_error("float", "must be a float"))
    }
}

/// Validates that a string contains a `YYYY-MM-DD` date.
pub fn date(value: &str) -> Result<(), ValidationError> {
    if predicates::is_date(value) {
        Ok(())
    } else {
        Err(rule_error("date", "must contain a YYYY-MM-DD date"))
    }
}

/// Validates that a string is an RFC 3339 timestamp, zone included.
pub fn rfc3339(value: &str) -> Result<(), ValidationError> {
    if predicates::is_rfc3339(value) {
        Ok(())
    } else {
        Err(rule_error("rfc3339", "must be an RFC 3339 timestamp"))
    }
}

/// Validates that a string is an RFC 3339 timestamp with the zone omitted.
pub fn rfc3339_without_zone(value: &str) -> Result<(), ValidationError> {
    if predicates::is_rfc3339_without_zone(value) {
        Ok(())
    } else {
        Err(rule_error(
            "rfc3339WithoutZone",
            "must be an RFC 3339 timestamp without a zone offset",
        ))
    }
}

/// Validates that a string is a timestamp in either RFC 3339 form.
pub fn datetime(value: &str) -> Result<(), ValidationError> {
    if predicates::is_datetime(value) {
        Ok(())
    } else {
        Err(rule_error(
            "datetime",
            "must be an RFC 3339 timestamp, with or without a zone offset",
        ))
    }
}

/// Validates that a nullable scalar wrapper holds a value.
///
/// The derive engine invokes custom validators on wrapper fields without
/// unwrapping them first, so the null check happens here rather than being
/// delegated to the engine.
pub fn not_null<T: NullableValue>(value: &T) -> Result<(), ValidationError> {
    if value.is_null() {
        Err(rule_error("notNull", "must not be null"))
    } else {
        Ok(())
    }
}

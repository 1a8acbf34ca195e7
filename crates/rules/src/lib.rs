//! Custom field-validation rules for the `validator` derive engine.
//!
//! Provides integer, float, date, and RFC 3339 timestamp rules, nullable SQL
//! scalar wrappers with a non-null rule, and a process-wide rule table for
//! engines that dispatch on rule-name strings. Struct traversal, tag parsing,
//! and error aggregation stay in the `validator` crate.
//!
//! ```
//! use fieldgate_rules::{validators, NullString};
//! use validator::Validate;
//!
//! #[derive(Validate)]
//! struct Record {
//!     #[validate(custom(function = validators::int))]
//!     count: String,
//!     #[validate(required)]
//!     label: NullString,
//! }
//!
//! let record = Record {
//!     count: "42".to_string(),
//!     label: NullString::some("ok".to_string()),
//! };
//! assert!(record.validate().is_ok());
//! ```

pub mod nullable;
pub mod predicates;
pub mod rules;
pub mod validators;

pub use nullable::{NullBool, NullFloat, NullInt, NullString, NullableValue};
pub use rules::{Predicate, RuleSet};

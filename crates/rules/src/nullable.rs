//! Nullable SQL scalar wrappers.
//!
//! Each wrapper carries an optional primitive and serializes transparently,
//! so a database `NULL` travels as JSON `null`. Extraction goes through the
//! [`NullableValue`] trait instead of runtime type inspection; wrappers also
//! implement `ValidateRequired` so `#[validate(required)]` enforces non-null.

use serde::{Deserialize, Serialize};
use validator::ValidateRequired;

/// Capability of holding an underlying value that may be absent.
pub trait NullableValue {
    /// The wrapped primitive type.
    type Inner;

    /// The underlying value, or `None` when null.
    fn value(&self) -> Option<&Self::Inner>;

    /// Whether the wrapper holds no value.
    fn is_null(&self) -> bool {
        self.value().is_none()
    }
}

macro_rules! nullable_scalar {
    ($($(#[$doc:meta])* $name:ident => $inner:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub Option<$inner>);

            impl $name {
                /// Wrap a present value.
                pub fn some(value: $inner) -> Self {
                    Self(Some(value))
                }

                /// The null wrapper.
                pub fn null() -> Self {
                    Self(None)
                }
            }

            impl NullableValue for $name {
                type Inner = $inner;

                fn value(&self) -> Option<&$inner> {
                    self.0.as_ref()
                }
            }

            impl ValidateRequired for $name {
                fn is_some(&self) -> bool {
                    self.0.is_some()
                }
            }

            impl From<Option<$inner>> for $name {
                fn from(value: Option<$inner>) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

nullable_scalar! {
    /// A string that may be SQL `NULL`.
    NullString => String,
    /// A 64-bit integer that may be SQL `NULL`.
    NullInt => i64,
    /// A boolean that may be SQL `NULL`.
    NullBool => bool,
    /// A 64-bit float that may be SQL `NULL`.
    NullFloat => f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_extraction_on_present() {
        let s = NullString::some("hello".to_string());
        assert_eq!(s.value().map(String::as_str), Some("hello"));
        assert!(!s.is_null());
    }

    #[test]
    fn value_extraction_on_null() {
        let n = NullInt::null();
        assert_eq!(n.value(), None);
        assert!(n.is_null());
    }

    #[test]
    fn default_is_null() {
        assert!(NullBool::default().is_null());
        assert!(NullFloat::default().is_null());
    }

    #[test]
    fn serializes_transparently() {
        let present = serde_json::to_value(NullInt::some(42)).unwrap();
        assert_eq!(present, serde_json::json!(42));

        let absent = serde_json::to_value(NullString::null()).unwrap();
        assert_eq!(absent, serde_json::Value::Null);
    }

    #[test]
    fn deserializes_from_null_and_value() {
        let n: NullFloat = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert!(n.is_null());

        let f: NullFloat = serde_json::from_value(serde_json::json!(1.5)).unwrap();
        assert_eq!(f.value(), Some(&1.5));
    }
}

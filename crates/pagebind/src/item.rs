//! Item values carried between a source and its display elements.
//!
//! Sources hand items to the adapter as [`ItemValue`]s: a small set of scalar
//! variants plus a type-erased `Custom` variant for application payloads.
//! The adapter never inspects custom payloads; it only forwards them to the
//! binding host and compares them by reference identity.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Trait for opaque application payloads carried in [`ItemValue::Custom`].
///
/// Payloads are shared behind `Arc` and compared by pointer identity, so the
/// same payload handle compares equal to itself and to nothing else. The
/// `Debug` bound provides the string form used by the simple fallback
/// rendering.
pub trait AnyItem: Any + fmt::Debug + Send + Sync {
    /// Returns this payload as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// A single item value handed from an items source to the adapter.
///
/// Scalar variants compare by value; `Custom` payloads compare by `Arc`
/// identity. This is the equality [`position lookup`](crate::BindingPagerAdapter::position_of)
/// uses, matching the source's own semantics.
///
/// The [`Display`](fmt::Display) form is what the simple fallback template
/// renders: `Null` renders as the empty string, scalars as their usual text,
/// `Custom` as its `Debug` form.
#[derive(Debug, Clone, Default)]
pub enum ItemValue {
    /// No value. Renders as the empty string.
    #[default]
    Null,
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
    /// Opaque application payload, shared and compared by identity.
    Custom(Arc<dyn AnyItem>),
}

impl ItemValue {
    /// Creates a custom value from any payload implementing [`AnyItem`].
    pub fn custom<T: AnyItem>(payload: T) -> Self {
        ItemValue::Custom(Arc::new(payload))
    }

    /// Returns `true` if this is `ItemValue::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ItemValue::Null)
    }

    /// Returns the contained string, if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ItemValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Downcasts a `Custom` payload to a concrete type.
    pub fn downcast_custom<T: AnyItem>(&self) -> Option<&T> {
        match self {
            ItemValue::Custom(payload) => payload.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for ItemValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ItemValue::Null, ItemValue::Null) => true,
            (ItemValue::String(a), ItemValue::String(b)) => a == b,
            (ItemValue::Int(a), ItemValue::Int(b)) => a == b,
            (ItemValue::Float(a), ItemValue::Float(b)) => a == b,
            (ItemValue::Bool(a), ItemValue::Bool(b)) => a == b,
            (ItemValue::Custom(a), ItemValue::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemValue::Null => Ok(()),
            ItemValue::String(s) => f.write_str(s),
            ItemValue::Int(n) => write!(f, "{n}"),
            ItemValue::Float(n) => write!(f, "{n}"),
            ItemValue::Bool(b) => write!(f, "{b}"),
            ItemValue::Custom(payload) => write!(f, "{payload:?}"),
        }
    }
}

impl From<&str> for ItemValue {
    fn from(s: &str) -> Self {
        ItemValue::String(s.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(s: String) -> Self {
        ItemValue::String(s)
    }
}

impl From<i64> for ItemValue {
    fn from(n: i64) -> Self {
        ItemValue::Int(n)
    }
}

impl From<i32> for ItemValue {
    fn from(n: i32) -> Self {
        ItemValue::Int(n as i64)
    }
}

impl From<f64> for ItemValue {
    fn from(n: f64) -> Self {
        ItemValue::Float(n)
    }
}

impl From<bool> for ItemValue {
    fn from(b: bool) -> Self {
        ItemValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Payload {
        label: &'static str,
    }

    impl AnyItem for Payload {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(ItemValue::Null.to_string(), "");
        assert_eq!(ItemValue::from("hello").to_string(), "hello");
        assert_eq!(ItemValue::from(42).to_string(), "42");
        assert_eq!(ItemValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_scalar_equality() {
        assert_eq!(ItemValue::from("a"), ItemValue::from("a"));
        assert_ne!(ItemValue::from("a"), ItemValue::from("b"));
        assert_ne!(ItemValue::from(1), ItemValue::from("1"));
        assert_eq!(ItemValue::Null, ItemValue::Null);
    }

    #[test]
    fn test_custom_identity_equality() {
        let a = ItemValue::custom(Payload { label: "x" });
        let b = a.clone();
        let c = ItemValue::custom(Payload { label: "x" });

        // Clones share the payload; separate payloads never compare equal.
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_downcast_custom() {
        let value = ItemValue::custom(Payload { label: "x" });
        let payload = value.downcast_custom::<Payload>().unwrap();
        assert_eq!(payload.label, "x");
        assert!(ItemValue::from(1).downcast_custom::<Payload>().is_none());
    }
}

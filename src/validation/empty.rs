//! Emptiness checks.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// Values that can be blank.
///
/// Strings are empty when they hold only whitespace, containers when they
/// have no elements, `None`/`null` always. Numbers and booleans are never
/// empty, zero and `false` included.
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

/// Returns `true` if `value` is absent, blank or has no elements.
///
/// ```rust
/// use pure_utils::validation::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty("   "));
/// assert!(is_empty(&json!({})));
/// assert!(!is_empty(&0));
/// ```
pub fn is_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(|v| v.is_empty_value())
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl IsEmpty for Map<String, Value> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty_value(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

macro_rules! never_empty {
    ($($t:ty),* $(,)?) => {
        $(
            impl IsEmpty for $t {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};
use url::Url;

/// Structural emptiness of a request argument.
///
/// Only "nothing here" shapes count as empty: empty strings, empty maps and
/// sequences, JSON `null` and `None`. Numbers and booleans are never empty.
pub trait IsEmpty {
    fn is_empty_arg(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty_arg(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_arg(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_arg(&self) -> bool {
        (**self).is_empty_arg()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_arg(&self) -> bool {
        self.as_ref().map_or(true, IsEmpty::is_empty_arg)
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_arg(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_arg(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_arg(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_arg(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for Map<String, Value> {
    fn is_empty_arg(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for Value {
    fn is_empty_arg(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

/// Check whether `url` already names a host and should bypass the base URL.
pub fn is_absolute_url(url: &str) -> bool {
    Url::parse(url).map(|u| u.has_host()).unwrap_or(false)
}

/// Resolve a request path against the base URL.
///
/// Absolute URLs pass through untouched; relative paths are joined with
/// exactly one `/` regardless of slashes on either side.
pub fn join_url(base_url: &str, url: &str) -> String {
    if is_absolute_url(url) {
        return url.to_string();
    }
    if url.is_empty() {
        return base_url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}

//! Dotted-path addressing over nested value trees.
//!
//! Entities expose their raw fields and their derived `display` data as one
//! [`serde_json::Value`] tree. Templates address that tree with dot-separated
//! paths such as `display.attack.A0.total_base_gear_merge`.
//!
//! - [`get`] walks the path and returns `None` ("no value") as soon as a
//!   segment is missing. It never fails.
//! - [`set`] walks the path and creates an empty object for every missing
//!   intermediate segment before assigning the final one.
//!
//! [`DisplayTree`] wraps the object tree written by display derivation.

use serde::Serialize;
use serde_json::{Map, Value};

/// Resolve `path` against `root`.
///
/// Object nodes are looked up by key, array nodes by numeric index. An empty
/// path resolves to `root` itself.
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }

    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    // A stored null is indistinguishable from an absent value
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Assign `value` at `path`, creating intermediate objects as needed.
///
/// Intermediate segments holding a non-object value are replaced by an empty
/// object. Returns `false` without touching anything when `root` is null (the
/// "no value" sentinel) or when `path` is empty.
pub fn set(root: &mut Value, path: &str, value: Value) -> bool {
    if root.is_null() || path.is_empty() {
        return false;
    }

    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = root;
    for segment in parents {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Some(map) = current.as_object_mut() else {
            return false;
        };
        current = map.entry(segment.to_string()).or_insert_with(|| Value::Object(Map::new()));
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    let Some(map) = current.as_object_mut() else {
        return false;
    };
    map.insert((*last).to_string(), value);
    true
}

/// Render a resolved value the way it appears in wiki markup.
///
/// Strings are used verbatim, numbers and booleans with their natural
/// representation and lists joined by `", "`. Objects and null have no
/// textual form.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Option<Vec<String>> = items.iter().map(stringify).collect();
            parts.map(|p| p.join(", "))
        }
        Value::Object(_) | Value::Null => None,
    }
}

/// The derived, presentation-ready data attached to every entity.
///
/// The tree is rebuilt from scratch on every derivation pass; there is no
/// incremental update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTree(Value);

impl DisplayTree {
    /// Create an empty display tree.
    pub fn new() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Store a value at a dotted path.
    pub fn set(&mut self, path: &str, value: impl Serialize) {
        match serde_json::to_value(value) {
            Ok(value) => {
                set(&mut self.0, path, value);
            }
            Err(e) => tracing::error!("Cannot store display value at '{}': {}", path, e),
        }
    }

    /// Store an empty string at a dotted path (an unused tier or slot).
    pub fn set_empty(&mut self, path: &str) {
        set(&mut self.0, path, Value::String(String::new()));
    }

    /// Read a value at a dotted path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        get(&self.0, path)
    }

    /// Read a string value at a dotted path.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Read an integer value at a dotted path.
    pub fn get_u64(&self, path: &str) -> Option<u64> {
        self.get(path).and_then(Value::as_u64)
    }

    /// Borrow the underlying value tree.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the tree, returning the underlying value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for DisplayTree {
    fn default() -> Self {
        Self::new()
    }
}

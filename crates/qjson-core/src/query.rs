//! Read-only path resolution, plus typed accessors on top of it.

use crate::error::{QjsonError, Result};
use crate::path::Segment;
use crate::value::{Kind, Map, Value};

/// Resolve `path` against `root` and return the addressed value.
///
/// The empty path returns `root` itself, whatever it holds. Each segment must
/// match the node it is applied to: a key needs a map, an index needs a list.
///
/// # Errors
///
/// - [`QjsonError::Type`] when a key meets a non-map or an index meets a non-list
/// - [`QjsonError::Key`] when a map lacks the requested key
/// - [`QjsonError::Index`] when an index is negative or past the end of its list
///
/// # Examples
///
/// ```
/// use qjson_core::{path, query, Value};
///
/// let doc: Value = serde_json::json!({"a": {"b": ["x", "y"]}}).into();
/// assert_eq!(query(&doc, &path!["a", "b", 1]).unwrap(), &Value::from("y"));
/// ```
pub fn query<'a>(root: &'a Value, path: &[Segment]) -> Result<&'a Value> {
    path.iter().try_fold(root, step)
}

fn step<'a>(node: &'a Value, segment: &Segment) -> Result<&'a Value> {
    match (node, segment) {
        (Value::Map(map), Segment::Key(key)) => {
            map.get(key).ok_or_else(|| QjsonError::Key(key.clone()))
        }
        (Value::List(items), Segment::Index(index)) => usize::try_from(*index)
            .ok()
            .and_then(|position| items.get(position))
            .ok_or(QjsonError::Index(*index)),
        (node, segment) => Err(QjsonError::container_mismatch(segment, node.kind())),
    }
}

/// Resolve `path` and require a boolean.
pub fn query_bool(root: &Value, path: &[Segment]) -> Result<bool> {
    let value = query(root, path)?;
    value
        .as_bool()
        .ok_or_else(|| QjsonError::unexpected_kind(Kind::Bool, value.kind()))
}

/// Resolve `path` and require a number.
pub fn query_number(root: &Value, path: &[Segment]) -> Result<f64> {
    let value = query(root, path)?;
    value
        .as_number()
        .ok_or_else(|| QjsonError::unexpected_kind(Kind::Number, value.kind()))
}

/// Resolve `path` and require a string.
pub fn query_string<'a>(root: &'a Value, path: &[Segment]) -> Result<&'a str> {
    let value = query(root, path)?;
    value
        .as_str()
        .ok_or_else(|| QjsonError::unexpected_kind(Kind::String, value.kind()))
}

/// Resolve `path` and require a list.
pub fn query_list<'a>(root: &'a Value, path: &[Segment]) -> Result<&'a [Value]> {
    let value = query(root, path)?;
    value
        .as_list()
        .ok_or_else(|| QjsonError::unexpected_kind(Kind::List, value.kind()))
}

/// Resolve `path` and require a map.
pub fn query_object<'a>(root: &'a Value, path: &[Segment]) -> Result<&'a Map> {
    let value = query(root, path)?;
    value
        .as_map()
        .ok_or_else(|| QjsonError::unexpected_kind(Kind::Map, value.kind()))
}

/// Resolve `path` and require an explicit `null`.
pub fn query_null(root: &Value, path: &[Segment]) -> Result<()> {
    let value = query(root, path)?;
    if value.is_null() {
        Ok(())
    } else {
        Err(QjsonError::unexpected_kind(Kind::Null, value.kind()))
    }
}

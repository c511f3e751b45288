//! Synthesis of the minimal subtree that makes a path exist.

use std::iter;

use tracing::trace;

use crate::error::{QjsonError, Result};
use crate::path::Segment;
use crate::value::{Map, Value};

/// Build the smallest tree in which `path` leads to `terminal`.
///
/// The tree is built from the leaf upwards. A key becomes a single-entry map;
/// an index `i` becomes a list of `i + 1` elements, all `null` except
/// position `i`. The empty path yields `terminal` unchanged.
///
/// # Errors
///
/// Returns [`QjsonError::Arg`] if any index in `path` is negative, or so large
/// that its list cannot be allocated.
///
/// # Examples
///
/// ```
/// use qjson_core::{construct, path, Value};
///
/// let tree = construct(&path!["a", 1], Value::from(true)).unwrap();
/// let expected: Value = serde_json::json!({"a": [null, true]}).into();
/// assert_eq!(tree, expected);
/// ```
pub fn construct(path: &[Segment], terminal: Value) -> Result<Value> {
    trace!(depth = path.len(), "constructing subtree");
    path.iter().rev().try_fold(terminal, |child, segment| -> Result<Value> {
        match segment {
            Segment::Key(key) => Ok(Value::Map(Map::from([(key.clone(), child)]))),
            Segment::Index(index) => {
                let position = usize::try_from(*index).map_err(|_| {
                    QjsonError::Arg(format!("negative index {index} is not allowed"))
                })?;
                let mut items = Vec::new();
                items.try_reserve_exact(position + 1).map_err(|_| {
                    QjsonError::Arg(format!("index {index} is too large to allocate"))
                })?;
                items.extend(iter::repeat_n(Value::Null, position));
                items.push(child);
                Ok(Value::List(items))
            }
        }
    })
}

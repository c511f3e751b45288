//! In-place writes at a path, creating whatever structure is missing.
//!
//! # Key design decisions
//!
//! - **Slot vs node**: the public entry point takes `&mut Option<Value>` so an
//!   uninitialized root (`None`) is distinct from a root holding `null`. Past
//!   the root the walk works on `&mut Value`.
//! - **Missing structure**: a missing map entry, a `null` child or a `null`
//!   root with path left to walk is filled by [`construct`] in one go; nothing
//!   below it can exist, so the walk stops there.
//! - **List growth**: an index past the end of an existing list pads it with
//!   `null` up to that index before writing. Growth is part of the write and
//!   is never reported as an error.
//! - **Previous value**: a slot created by growth during this call had no
//!   previous value and reports `None`. A `null` that was already stored
//!   before the call reports `Some(Value::Null)`.

use std::mem;

use tracing::{debug, trace};

use crate::construct::construct;
use crate::error::{QjsonError, Result};
use crate::path::Segment;
use crate::value::Value;

/// Write `terminal` at `path` below `slot` and return what it replaced.
///
/// - The empty path replaces the whole slot.
/// - An uninitialized slot receives a freshly constructed subtree.
/// - Existing maps and lists are walked in place; missing keys, `null`
///   children and out-of-range list indices are filled in on the way.
///
/// Returns `Ok(None)` when nothing was stored at `path` before the call.
///
/// # Errors
///
/// - [`QjsonError::Arg`] when a negative index falls in the part of the path
///   that has to be constructed
/// - [`QjsonError::Index`] when a negative index is applied to an existing list,
///   or when growing the list to reach the index cannot be allocated
/// - [`QjsonError::Type`] when a key meets a list, an index meets a map, or the
///   walk reaches a bool, number or string with path left over
///
/// # Examples
///
/// ```
/// use qjson_core::{path, update, Value};
///
/// let mut doc = None;
/// update(&mut doc, &path!["menu", "items", 1], Value::from("Open")).unwrap();
/// let expected: Value = serde_json::json!({"menu": {"items": [null, "Open"]}}).into();
/// assert_eq!(doc, Some(expected));
/// ```
pub fn update(slot: &mut Option<Value>, path: &[Segment], terminal: Value) -> Result<Option<Value>> {
    if path.is_empty() {
        return Ok(slot.replace(terminal));
    }
    match slot {
        Some(node) => update_node(node, path, terminal),
        None => {
            *slot = Some(construct(path, terminal)?);
            Ok(None)
        }
    }
}

/// Walk `path` down from `node`, one segment per call.
fn update_node(node: &mut Value, path: &[Segment], terminal: Value) -> Result<Option<Value>> {
    let Some((head, rest)) = path.split_first() else {
        return Ok(Some(mem::replace(node, terminal)));
    };

    match (node, head) {
        (Value::Map(map), Segment::Key(key)) => match map.get_mut(key) {
            Some(child) => write_child(child, rest, terminal, false),
            None => {
                let subtree = construct(rest, terminal)?;
                trace!(key = %key, "inserting new map entry");
                map.insert(key.clone(), subtree);
                Ok(None)
            }
        },
        (Value::List(items), Segment::Index(index)) => {
            let position = usize::try_from(*index).map_err(|_| QjsonError::Index(*index))?;
            let grown = position >= items.len();
            if grown {
                debug!(from = items.len(), to = position + 1, "growing list");
                items
                    .try_reserve(position + 1 - items.len())
                    .map_err(|_| QjsonError::Index(*index))?;
                items.resize(position + 1, Value::Null);
            }
            write_child(&mut items[position], rest, terminal, grown)
        }
        (node, _) if node.is_null() => {
            *node = construct(path, terminal)?;
            Ok(None)
        }
        (node, segment) => Err(QjsonError::container_mismatch(segment, node.kind())),
    }
}

/// Finish the step into `child`. `fresh` marks a slot that growth created
/// during this call.
fn write_child(
    child: &mut Value,
    rest: &[Segment],
    terminal: Value,
    fresh: bool,
) -> Result<Option<Value>> {
    if rest.is_empty() {
        let previous = mem::replace(child, terminal);
        return Ok((!fresh).then_some(previous));
    }
    if child.is_null() {
        *child = construct(rest, terminal)?;
        return Ok(None);
    }
    update_node(child, rest, terminal)
}

//! # qjson-core
//!
//! Query and update untyped, JSON-shaped documents by path.
//!
//! A document is a [`Value`] tree. A path is a list of [`Segment`]s, each a
//! map key or a list index. Reads never touch the tree; writes create any
//! missing maps and lists on the way down and grow existing lists as needed.
//!
//! ## Quick start
//!
//! ```rust
//! use qjson_core::{path, query_string, update, Value};
//!
//! let mut doc = None;
//! update(&mut doc, &path!["menu", "id"], Value::from("file")).unwrap();
//! update(&mut doc, &path!["menu", "popup", "menuitem", 0, "value"], Value::from("New")).unwrap();
//!
//! let doc = doc.unwrap();
//! assert_eq!(query_string(&doc, &path!["menu", "popup", "menuitem", 0, "value"]).unwrap(), "New");
//! assert_eq!(
//!     serde_json::to_string(&doc).unwrap(),
//!     r#"{"menu":{"id":"file","popup":{"menuitem":[{"value":"New"}]}}}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree and its serde support
//! - [`path`] — `Segment`, `Path`, the `path!` macro and the text path syntax
//! - [`query`] — read-only resolution and typed accessors
//! - [`construct`] — minimal subtree synthesis for paths that do not exist yet
//! - [`update`] — in-place writes with subtree synthesis and list growth
//! - [`convert`] — conversions to and from `serde_json::Value`
//! - [`error`] — the error taxonomy shared by all of the above

pub mod construct;
pub mod convert;
pub mod error;
pub mod path;
pub mod query;
pub mod update;
pub mod value;

pub use construct::construct;
pub use error::{QjsonError, Result};
pub use path::{Path, Segment};
pub use query::{query, query_bool, query_list, query_null, query_number, query_object, query_string};
pub use update::update;
pub use value::{Kind, Map, Value};

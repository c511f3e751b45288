//! Error types for path queries, subtree construction and updates.

use crate::path::Segment;
use crate::value::Kind;
use thiserror::Error;

/// Errors reported by [`query`](crate::query), [`construct`](crate::construct)
/// and [`update`](crate::update).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QjsonError {
    /// Malformed invocation: a negative index handed to construct, or a path
    /// string that does not parse.
    #[error("{0}")]
    Arg(String),

    /// The node kind does not fit the segment applied to it, or a typed
    /// accessor found a different variant than it asked for.
    #[error("{0}")]
    Type(String),

    /// A key missing from an existing map during a query.
    #[error("key not found: {0:?}")]
    Key(String),

    /// An index that is negative, or past the end of a list during a query.
    #[error("index out of range: {0}")]
    Index(i64),
}

impl QjsonError {
    /// A segment was applied to a node that cannot hold it.
    pub(crate) fn container_mismatch(segment: &Segment, found: Kind) -> Self {
        match segment {
            Segment::Key(key) => Self::Type(format!("cannot look up key {key:?} in {found}")),
            Segment::Index(index) => Self::Type(format!("cannot look up index {index} in {found}")),
        }
    }

    /// A typed accessor resolved a value of the wrong kind.
    pub(crate) fn unexpected_kind(expected: Kind, found: Kind) -> Self {
        Self::Type(format!("expected {expected}, found {found}"))
    }
}

/// Convenience alias used throughout qjson-core.
pub type Result<T> = std::result::Result<T, QjsonError>;

/*!
# Error Taxonomy

All input-format and range violations are detected eagerly at parse/build or
access time and surfaced as typed, caller-recoverable errors. Nothing is
retried or silently recovered, and no partially constructed store is ever
observable: constructors build into temporaries and return by value.
*/

use thiserror::Error;

/// Errors raised by graph construction, parsing, and access.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex reference was zero, unparsable, or out of range.
    /// External vertex indices are 1-based and must be positive.
    #[error("invalid vertex index: {reason}")]
    InvalidVertexIndex { reason: String },

    /// The `--` separator between the endpoints of an edge line was
    /// missing or malformed.
    #[error("invalid edge syntax: expected `--` between vertex indices, read `{found}`")]
    InvalidEdgeSyntax { found: String },

    /// The payload token of an edge line was missing, malformed, or
    /// present although the edge type carries no payload.
    #[error("invalid edge payload: {reason}")]
    InvalidEdgeFormat { reason: String },

    /// An operation that requires a built store was called on an empty one.
    #[error("graph has not been built: {operation}")]
    StateError { operation: &'static str },

    /// Transport error while reading or writing a graph.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn invalid_vertex(reason: impl Into<String>) -> Self {
        GraphError::InvalidVertexIndex {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_payload(reason: impl Into<String>) -> Self {
        GraphError::InvalidEdgeFormat {
            reason: reason.into(),
        }
    }
}

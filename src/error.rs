//! Error types for graph-walker
//!
//! This layer is a mechanism, not a policy owner: the only error it can
//! report on its own behalf is the deterministic rejection of unsupported
//! iterator operations. Failures inside caller-supplied callbacks propagate
//! to the caller unmodified (as panics), with the walker stack left in its
//! last-committed state.

use thiserror::Error;

/// Errors from graph traversal operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Element removal through the iterator surface is never supported
    #[error("remove is not supported by graph iterators")]
    RemoveUnsupported,
}

/// Result type alias for GraphError
pub type Result<T> = std::result::Result<T, GraphError>;

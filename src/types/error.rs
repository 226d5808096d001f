//! Error types for the keyed graph library.

use thiserror::Error;

/// All errors that can occur in the keyed graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No node carries the requested key.
    #[error("Could not find node {0}")]
    NodeNotFound(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

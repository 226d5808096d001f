//! All data types for the keyed graph library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::{EdgeKey, EdgeTable};
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

/// Construction-time settings for a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Edges are one-way when set; otherwise symmetric.
    pub directed: bool,
}

impl GraphOptions {
    /// Options for an undirected graph.
    pub fn undirected() -> Self {
        Self { directed: false }
    }

    /// Options for a directed graph.
    pub fn directed() -> Self {
        Self { directed: true }
    }
}

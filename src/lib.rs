//! KeyedGraph — small in-memory graph with weighted edges.
//!
//! Nodes are identified by string keys and joined by weighted edges,
//! either undirected (symmetric) or directed. The graph answers
//! single-source shortest path queries (Dijkstra), reconstructs paths,
//! and walks nodes breadth-first or depth-first.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Bfs, Dfs, Graph, GraphBuilder, PathEntry, ShortestPaths};
pub use types::{EdgeKey, EdgeTable, GraphError, GraphOptions, GraphResult, Node, NodeId};

//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod keyed_graph;
pub mod shortest_path;
pub mod traversal;

pub use builder::GraphBuilder;
pub use keyed_graph::Graph;
pub use shortest_path::{PathEntry, ShortestPaths};
pub use traversal::{Bfs, Dfs};

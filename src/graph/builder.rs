//! Fluent API for building Graph instances.

use crate::types::{GraphOptions, GraphResult};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Nodes are added first, then edges, each in call order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    options: GraphOptions,
    nodes: Vec<String>,
    edges: Vec<(String, String, f64)>,
}

impl GraphBuilder {
    /// Create a new builder for an undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether edges are one-way.
    pub fn directed(mut self, directed: bool) -> Self {
        self.options.directed = directed;
        self
    }

    /// Add a node.
    pub fn node(mut self, key: impl Into<String>) -> Self {
        self.nodes.push(key.into());
        self
    }

    /// Add several nodes in order.
    pub fn nodes<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Add a weighted edge between two nodes.
    pub fn edge(mut self, key1: impl Into<String>, key2: impl Into<String>, weight: f64) -> Self {
        self.edges.push((key1.into(), key2.into(), weight));
        self
    }

    /// Build the final Graph. Fails if an edge names a key no node carries.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::with_options(self.options);
        for key in self.nodes {
            graph.add_node(key);
        }
        for (key1, key2, weight) in &self.edges {
            graph.add_edge(key1, key2, *weight)?;
        }
        Ok(graph)
    }
}

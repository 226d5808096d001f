//! Graph vertices and their adjacency lists.

use std::fmt;

/// Position of a node in the graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index of this node (insertion position).
    pub fn index(self) -> usize {
        self.0
    }
}

/// A keyed vertex with an ordered list of adjacent vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: String,
    /// Edge-addition order; repeated `add_edge` calls repeat entries.
    neighbours: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            neighbours: Vec::new(),
        }
    }

    /// The node's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Adjacent node ids in edge-addition order.
    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }

    /// Number of adjacency entries, duplicates included.
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    pub(crate) fn add_neighbour(&mut self, id: NodeId) {
        self.neighbours.push(id);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

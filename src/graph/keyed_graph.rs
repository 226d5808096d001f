//! Core graph structure — keyed nodes + weighted edge table.

use log::debug;

use crate::types::{EdgeTable, GraphError, GraphOptions, GraphResult, Node, NodeId};

/// An in-memory graph of keyed nodes joined by weighted edges.
///
/// Nodes and edges are append-only. Node lookup is a linear scan in
/// insertion order and returns the first node carrying the key.
#[derive(Debug, Clone)]
pub struct Graph {
    /// All nodes, in insertion order. `NodeId` indexes this vec.
    nodes: Vec<Node>,
    /// Edge weights keyed by normalized endpoint pair.
    edges: EdgeTable,
    /// Fixed at construction.
    directed: bool,
}

impl Graph {
    /// Create an empty undirected graph.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::with_options(GraphOptions::directed())
    }

    /// Create an empty graph with explicit options.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            nodes: Vec::new(),
            edges: EdgeTable::new(options.directed),
            directed: options.directed,
        }
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes, duplicates included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct weighted edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get all nodes (immutable slice, insertion order).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The edge weight table.
    pub fn edges(&self) -> &EdgeTable {
        &self.edges
    }

    /// Get a node by arena id.
    pub fn node_at(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Append a new node with no neighbours. Keys are not checked for
    /// uniqueness; a duplicate is stored but shadowed by the first
    /// node with that key.
    pub fn add_node(&mut self, key: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let node = Node::new(key);
        debug!("Added node {} at index {}", node.key(), id.0);
        self.nodes.push(node);
        id
    }

    /// Resolve a key to the id of the first node carrying it.
    pub fn node_id(&self, key: &str) -> GraphResult<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.key() == key)
            .map(NodeId)
            .ok_or_else(|| GraphError::NodeNotFound(key.to_string()))
    }

    /// Get the first node carrying `key`.
    pub fn get_node(&self, key: &str) -> GraphResult<&Node> {
        let id = self.node_id(key)?;
        Ok(&self.nodes[id.0])
    }

    /// Whether any node carries `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.nodes.iter().any(|n| n.key() == key)
    }

    /// Add a weighted edge between two existing nodes.
    ///
    /// Both endpoints are resolved before anything is written, so a
    /// missing key leaves the graph untouched. Re-adding a pair
    /// overwrites its weight but appends to the adjacency lists again.
    pub fn add_edge(&mut self, key1: &str, key2: &str, weight: f64) -> GraphResult<()> {
        let start = self.node_id(key1)?;
        let end = self.node_id(key2)?;

        if let Some(old) = self.edges.insert(key1, key2, weight) {
            debug!("Edge {key1}-{key2} weight overwritten: {old} -> {weight}");
        } else {
            debug!("Added edge {key1}-{key2} with weight {weight}");
        }

        self.nodes[start.0].add_neighbour(end);
        if !self.directed {
            self.nodes[end.0].add_neighbour(start);
        }

        Ok(())
    }

    /// Weight of the edge between two keys, `None` if never added.
    pub fn get_edge(&self, key1: &str, key2: &str) -> Option<f64> {
        self.edges.get(key1, key2)
    }

    /// Adjacent nodes of the first node carrying `key`, in edge-addition order.
    pub fn neighbours(&self, key: &str) -> GraphResult<impl Iterator<Item = &Node> + '_> {
        let node = self.get_node(key)?;
        Ok(node.neighbours().iter().map(move |id| &self.nodes[id.0]))
    }

    /// Node lookup for ids this graph handed out.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

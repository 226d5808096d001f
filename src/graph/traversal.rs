//! Graph traversal algorithms (BFS, DFS).
//!
//! Both traversals are lazy iterators over `&Node`; the visitor entry
//! points on [`Graph`] drive them to completion.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::Graph;

/// Breadth-first iterator.
///
/// Work list is FIFO. A node is yielded the first time it is popped and
/// its unvisited neighbours are queued in adjacency order; repeated
/// entries are skipped on pop.
pub struct Bfs<'g> {
    graph: &'g Graph,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g> Bfs<'g> {
    fn new(graph: &'g Graph, start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Self {
            graph,
            queue,
            visited: vec![false; graph.node_count()],
        }
    }
}

impl<'g> Iterator for Bfs<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.pop_front() {
            if self.visited[id.index()] {
                continue;
            }
            self.visited[id.index()] = true;

            let node = self.graph.node(id);
            for &neighbour in node.neighbours() {
                if !self.visited[neighbour.index()] {
                    self.queue.push_back(neighbour);
                }
            }
            return Some(node);
        }
        None
    }
}

/// Depth-first pre-order iterator.
///
/// Yields a node before any of its descendants and explores neighbours
/// in adjacency order, matching the recursive formulation.
pub struct Dfs<'g> {
    graph: &'g Graph,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
}

impl<'g> Dfs<'g> {
    fn new(graph: &'g Graph, start: NodeId) -> Self {
        Self {
            graph,
            stack: vec![start],
            visited: vec![false; graph.node_count()],
        }
    }
}

impl<'g> Iterator for Dfs<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if self.visited[id.index()] {
                continue;
            }
            self.visited[id.index()] = true;

            let node = self.graph.node(id);
            // Reversed so the first neighbour is popped first.
            for &neighbour in node.neighbours().iter().rev() {
                if !self.visited[neighbour.index()] {
                    self.stack.push(neighbour);
                }
            }
            return Some(node);
        }
        None
    }
}

impl Graph {
    /// Lazy breadth-first traversal from `start_key`.
    pub fn bfs_iter(&self, start_key: &str) -> GraphResult<Bfs<'_>> {
        let start = self.node_id(start_key)?;
        Ok(Bfs::new(self, start))
    }

    /// Lazy depth-first traversal from `start_key`.
    pub fn dfs_iter(&self, start_key: &str) -> GraphResult<Dfs<'_>> {
        let start = self.node_id(start_key)?;
        Ok(Dfs::new(self, start))
    }

    /// Visit every node reachable from `start_key` in breadth-first order.
    pub fn bfs<F>(&self, start_key: &str, mut visit: F) -> GraphResult<()>
    where
        F: FnMut(&Node),
    {
        self.bfs_iter(start_key)?.for_each(&mut visit);
        Ok(())
    }

    /// Visit every node reachable from `start_key` in depth-first pre-order.
    pub fn dfs<F>(&self, start_key: &str, mut visit: F) -> GraphResult<()>
    where
        F: FnMut(&Node),
    {
        self.dfs_iter(start_key)?.for_each(&mut visit);
        Ok(())
    }

    /// Like [`Graph::bfs`], but stops at the first visitor error and returns it.
    pub fn try_bfs<F, E>(&self, start_key: &str, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&Node) -> Result<(), E>,
        E: From<GraphError>,
    {
        self.bfs_iter(start_key)?.try_for_each(&mut visit)
    }

    /// Like [`Graph::dfs`], but stops at the first visitor error and returns it.
    pub fn try_dfs<F, E>(&self, start_key: &str, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&Node) -> Result<(), E>,
        E: From<GraphError>,
    {
        self.dfs_iter(start_key)?.try_for_each(&mut visit)
    }
}

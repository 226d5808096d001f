//! Single-source shortest paths (Dijkstra) and path reconstruction.

use std::collections::HashMap;

use log::{debug, trace};

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Best known distance from the source and the preceding node on that path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    /// Sum of edge weights from the source; infinite when unreachable.
    pub distance: f64,
    /// Key of the preceding node; `None` for the source and unreachable nodes.
    pub previous: Option<String>,
}

impl PathEntry {
    /// Whether a finite path from the source exists.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Result map of a Dijkstra run, one entry per distinct node key in
/// node insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: String,
    entries: Vec<(String, PathEntry)>,
    index: HashMap<String, usize>,
}

impl ShortestPaths {
    /// Key the distances were computed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Entry for a node key.
    pub fn get(&self, key: &str) -> Option<&PathEntry> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Distance to a node key, `None` if the key is not in the graph.
    pub fn distance(&self, key: &str) -> Option<f64> {
        self.get(key).map(|e| e.distance)
    }

    /// Preceding node on the best path to `key`.
    pub fn previous(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|e| e.previous.as_deref())
    }

    /// Whether `key` is in the graph and reachable from the source.
    pub fn is_reachable(&self, key: &str) -> bool {
        self.get(key).is_some_and(PathEntry::is_reachable)
    }

    /// All entries in node insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk `previous` links back from `destination` and return the path
    /// in forward order, source and destination included. Unreachable
    /// destinations give an empty path.
    pub fn path_to(&self, destination: &str) -> GraphResult<Vec<String>> {
        let entry = self
            .get(destination)
            .ok_or_else(|| GraphError::NodeNotFound(destination.to_string()))?;
        if !entry.is_reachable() {
            return Ok(Vec::new());
        }

        let mut route = vec![destination.to_string()];
        let mut current = entry;
        while let Some(prev) = current.previous.as_deref() {
            route.push(prev.to_string());
            match self.get(prev) {
                Some(e) => current = e,
                None => break,
            }
        }
        route.reverse();
        Ok(route)
    }
}

impl Graph {
    /// Dijkstra from `source`, covering every node in the graph.
    ///
    /// The unvisited node with the smallest distance is found by a linear
    /// scan; ties go to the earliest inserted node. Once the smallest
    /// remaining distance is infinite the run stops, so unreachable nodes
    /// are never expanded. Missing edge weights never relax.
    pub fn dijkstra(&self, source: &str) -> GraphResult<ShortestPaths> {
        let source_id = self.node_id(source)?;
        let nodes = self.nodes();

        // One slot per distinct key; duplicates are shadowed by the first node.
        let mut slot_of: Vec<Option<usize>> = vec![None; nodes.len()];
        let mut slots: Vec<usize> = Vec::with_capacity(nodes.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.contains_key(node.key()) {
                continue;
            }
            index.insert(node.key().to_string(), slots.len());
            slot_of[i] = Some(slots.len());
            slots.push(i);
        }

        let mut distances = vec![f64::INFINITY; slots.len()];
        let mut previous: Vec<Option<usize>> = vec![None; slots.len()];
        let mut visited = vec![false; slots.len()];

        if let Some(s) = slot_of[source_id.index()] {
            distances[s] = 0.0;
        }

        let mut settled = 0usize;
        while let Some(current) = Self::find_lowest(&distances, &visited) {
            visited[current] = true;
            settled += 1;

            let node = &nodes[slots[current]];
            for &neighbour_id in node.neighbours() {
                let Some(next) = slot_of[neighbour_id.index()] else {
                    continue;
                };
                if visited[next] {
                    continue;
                }
                let neighbour = self.node(neighbour_id);
                let Some(weight) = self.get_edge(node.key(), neighbour.key()) else {
                    continue;
                };

                let alt = distances[current] + weight;
                if alt < distances[next] {
                    trace!(
                        "Relaxed {} via {}: {} -> {}",
                        neighbour.key(),
                        node.key(),
                        distances[next],
                        alt
                    );
                    distances[next] = alt;
                    previous[next] = Some(current);
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} settled, {} unreachable",
            source,
            settled,
            slots.len() - settled
        );

        let entries = slots
            .iter()
            .enumerate()
            .map(|(slot, &i)| {
                (
                    nodes[i].key().to_string(),
                    PathEntry {
                        distance: distances[slot],
                        previous: previous[slot].map(|p| nodes[slots[p]].key().to_string()),
                    },
                )
            })
            .collect();

        Ok(ShortestPaths {
            source: source.to_string(),
            entries,
            index,
        })
    }

    /// Shortest path from `source` to `destination` as a key sequence.
    ///
    /// Returns an empty path when `destination` is unreachable; a missing
    /// key on either end is an error.
    pub fn get_path(&self, source: &str, destination: &str) -> GraphResult<Vec<String>> {
        self.node_id(destination)?;
        self.dijkstra(source)?.path_to(destination)
    }

    /// Alias of [`Graph::get_path`].
    pub fn find_path(&self, source: &str, destination: &str) -> GraphResult<Vec<String>> {
        self.get_path(source, destination)
    }

    /// First unvisited slot with the strictly smallest finite distance.
    fn find_lowest(distances: &[f64], visited: &[bool]) -> Option<usize> {
        let mut lowest = None;
        let mut best = f64::INFINITY;
        for (slot, &distance) in distances.iter().enumerate() {
            if !visited[slot] && distance < best {
                best = distance;
                lowest = Some(slot);
            }
        }
        lowest
    }
}

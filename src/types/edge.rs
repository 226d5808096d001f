//! Edge weight storage keyed by endpoint pair.

use std::collections::HashMap;

/// Canonical endpoint pair of an edge.
///
/// Undirected pairs are stored with the smaller key first so that
/// `(a, b)` and `(b, a)` address the same weight. Directed pairs keep
/// their given order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey<'a> {
    /// First key of the stored pair.
    pub first: &'a str,
    /// Second key of the stored pair.
    pub second: &'a str,
}

impl<'a> EdgeKey<'a> {
    /// Normalize an endpoint pair under the given direction policy.
    pub fn normalize(key1: &'a str, key2: &'a str, directed: bool) -> Self {
        if directed || key1 <= key2 {
            Self {
                first: key1,
                second: key2,
            }
        } else {
            Self {
                first: key2,
                second: key1,
            }
        }
    }
}

/// Weight table, the source of truth for edge distances.
///
/// Adjacency lists only record topology; weights live here.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    directed: bool,
    weights: HashMap<String, HashMap<String, f64>>,
    len: usize,
}

impl EdgeTable {
    /// Create an empty table with a fixed direction policy.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            weights: HashMap::new(),
            len: 0,
        }
    }

    /// Whether pairs are stored in the order given.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Store a weight, returning the previous weight for the pair if any.
    pub fn insert(&mut self, key1: &str, key2: &str, weight: f64) -> Option<f64> {
        let key = EdgeKey::normalize(key1, key2, self.directed);
        let previous = self
            .weights
            .entry(key.first.to_string())
            .or_default()
            .insert(key.second.to_string(), weight);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Look up the weight for a pair. `None` means no such edge, which
    /// distance computations must treat as infinite.
    pub fn get(&self, key1: &str, key2: &str) -> Option<f64> {
        let key = EdgeKey::normalize(key1, key2, self.directed);
        self.weights
            .get(key.first)
            .and_then(|row| row.get(key.second))
            .copied()
    }

    /// Weight for a pair, infinity when absent.
    pub fn distance(&self, key1: &str, key2: &str) -> f64 {
        self.get(key1, key2).unwrap_or(f64::INFINITY)
    }

    /// Number of distinct stored pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no weight has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

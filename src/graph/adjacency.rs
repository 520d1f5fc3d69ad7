//! Adjacency lists — node index to ordered neighbor indices.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Edge;

/// Maps each node index to its neighbors, in the order they are explored.
///
/// Serialised as a JSON object keyed by node index, e.g. `{"0": [1, 2]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    entries: BTreeMap<usize, Vec<usize>>,
}

impl AdjacencyList {
    /// Create a new, empty adjacency list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive an adjacency list from an edge list.
    ///
    /// Directed edges contribute `from -> to` only, undirected edges both
    /// directions. Neighbor order follows edge order; duplicates are dropped.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut list = Self::new();
        for edge in edges {
            list.push_unique(edge.from, edge.to);
            if !edge.directed {
                list.push_unique(edge.to, edge.from);
            }
        }
        list
    }

    /// Set the neighbors of a node, replacing any previous entry.
    pub fn insert(&mut self, node: usize, neighbors: Vec<usize>) -> &mut Self {
        self.entries.insert(node, neighbors);
        self
    }

    /// Append a neighbor to a node's entry.
    pub fn push(&mut self, node: usize, neighbor: usize) -> &mut Self {
        self.entries.entry(node).or_default().push(neighbor);
        self
    }

    fn push_unique(&mut self, node: usize, neighbor: usize) {
        let list = self.entries.entry(node).or_default();
        if !list.contains(&neighbor) {
            list.push(neighbor);
        }
    }

    /// Neighbors of a node. A node without an entry has no neighbors.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.entries
            .get(&node)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the list has an entry (possibly empty) for this node.
    pub fn contains(&self, node: usize) -> bool {
        self.entries.contains_key(&node)
    }

    /// Number of nodes with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no node has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.entries.iter().map(|(&k, v)| (k, v.as_slice()))
    }
}

impl FromIterator<(usize, Vec<usize>)> for AdjacencyList {
    fn from_iter<I: IntoIterator<Item = (usize, Vec<usize>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

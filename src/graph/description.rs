//! The graph description passed explicitly to the renderer and animator.

use serde::{Deserialize, Serialize};

use crate::types::{Edge, GraphError, GraphResult, Node};

use super::AdjacencyList;

/// Everything a caller hands to the renderer and the animator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDescription {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Explicit traversal order. Derived from `edges` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacency_list: Option<AdjacencyList>,
}

impl GraphDescription {
    /// Create a description without an explicit adjacency list.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            adjacency_list: None,
        }
    }

    /// The adjacency list to traverse: the explicit one, or one derived
    /// from the edges.
    pub fn adjacency(&self) -> AdjacencyList {
        match &self.adjacency_list {
            Some(list) => list.clone(),
            None => AdjacencyList::from_edges(&self.edges),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check that every edge endpoint and adjacency entry names a real node.
    pub fn validate(&self) -> GraphResult<()> {
        let len = self.nodes.len();
        let check = |index: usize| {
            if index < len {
                Ok(())
            } else {
                Err(GraphError::NodeOutOfRange { index, len })
            }
        };

        for edge in &self.edges {
            check(edge.from)?;
            check(edge.to)?;
        }
        if let Some(list) = &self.adjacency_list {
            for (node, neighbors) in list.iter() {
                check(node)?;
                for &n in neighbors {
                    check(n)?;
                }
            }
        }
        Ok(())
    }

    /// Parse a description from JSON text.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

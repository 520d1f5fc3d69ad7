//! Fluent API for building GraphDescription instances.

use crate::types::{Edge, Node, Weight};

use super::{AdjacencyList, GraphDescription};

/// Fluent builder for constructing a GraphDescription.
#[derive(Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Option<AdjacencyList>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its index.
    pub fn add_node(&mut self, x: f64, y: f64, label: &str) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node::new(x, y, label));
        index
    }

    /// Add an undirected edge.
    pub fn link(&mut self, from: usize, to: usize) -> &mut Self {
        self.edges.push(Edge::new(from, to));
        self
    }

    /// Add a directed edge.
    pub fn link_directed(&mut self, from: usize, to: usize) -> &mut Self {
        self.edges.push(Edge::directed(from, to));
        self
    }

    /// Add an undirected edge with a weight label.
    pub fn link_weighted(
        &mut self,
        from: usize,
        to: usize,
        weight: impl Into<Weight>,
    ) -> &mut Self {
        self.edges.push(Edge::new(from, to).with_weight(weight));
        self
    }

    /// Add a fully specified edge.
    pub fn edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Use an explicit adjacency list instead of deriving one from edges.
    pub fn adjacency(&mut self, list: AdjacencyList) -> &mut Self {
        self.adjacency = Some(list);
        self
    }

    /// Build the final GraphDescription.
    pub fn build(self) -> GraphDescription {
        GraphDescription {
            nodes: self.nodes,
            edges: self.edges,
            adjacency_list: self.adjacency,
        }
    }
}

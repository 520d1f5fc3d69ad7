//! Positioned graph nodes.

use serde::{Deserialize, Serialize};

/// A node drawn at a fixed position. Nodes are identified by their index in
/// the caller's node sequence, not by any field of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Horizontal centre of the node circle.
    pub x: f64,
    /// Vertical centre of the node circle.
    pub y: f64,
    /// Text drawn inside the circle.
    pub label: String,
}

impl Node {
    /// Create a node at `(x, y)` with the given label.
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

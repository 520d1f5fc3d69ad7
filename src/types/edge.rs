//! Edges and their optional weight labels.

use serde::{Deserialize, Serialize};

/// Weight annotation of an edge: either a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Number(f64),
    Text(String),
}

impl Weight {
    /// Whether a label should be drawn for this weight.
    ///
    /// Zero, NaN and the empty string are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Weight {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Weight {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A connection between two nodes, addressed by node index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Index of the origin node.
    pub from: usize,
    /// Index of the destination node.
    pub to: usize,
    /// Optional weight drawn at the midpoint of the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    /// Directed edges end in an arrowhead.
    #[serde(default)]
    pub directed: bool,
}

impl Edge {
    /// Create an undirected, unweighted edge.
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            weight: None,
            directed: false,
        }
    }

    /// Create a directed, unweighted edge.
    pub fn directed(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            weight: None,
            directed: true,
        }
    }

    /// Attach a weight to this edge.
    pub fn with_weight(mut self, weight: impl Into<Weight>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// The weight label to draw, if any.
    pub fn label(&self) -> Option<String> {
        self.weight
            .as_ref()
            .filter(|w| w.is_truthy())
            .map(|w| w.to_string())
    }
}


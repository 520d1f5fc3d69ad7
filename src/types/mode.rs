//! Traversal modes.

use serde::{Deserialize, Serialize};

use super::{GraphError, BFS_COLOR, DFS_COLOR};

/// Which traversal an animation run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// Breadth-first, queue driven.
    Bfs,
    /// Depth-first, stack driven.
    Dfs,
}

impl TraversalMode {
    /// Return a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Parse a mode from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth_first" => Some(Self::Bfs),
            "dfs" | "depth" | "depth_first" => Some(Self::Dfs),
            _ => None,
        }
    }

    /// Default highlight colour for nodes visited in this mode.
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Bfs => BFS_COLOR,
            Self::Dfs => DFS_COLOR,
        }
    }
}

impl std::str::FromStr for TraversalMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GraphError::UnknownMode(s.to_string()))
    }
}

impl std::fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Error types for the graph-animate library.

use thiserror::Error;

/// All errors that can occur in the graph-animate library.
///
/// Rendering and animation never fail on a missing surface, a missing node
/// or a missing adjacency entry; those degrade to no-ops. Errors cover I/O,
/// parsing and explicit validation only.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A traversal mode name that is neither "bfs" nor "dfs".
    #[error("Unknown traversal mode: {0}")]
    UnknownMode(String),

    /// An edge or adjacency entry references a node that does not exist.
    #[error("Node index {index} out of range (graph has {len} nodes)")]
    NodeOutOfRange { index: usize, len: usize },

    /// No drawing surface registered under this id.
    #[error("Surface not found: {0}")]
    SurfaceNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph description or timeline JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed configuration file.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl GraphError {
    /// Process exit code reported by the `ganim` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Json(_) | Self::Config(_) => 2,
            Self::UnknownMode(_) => 3,
            Self::NodeOutOfRange { .. } | Self::SurfaceNotFound(_) => 4,
        }
    }
}

/// Convenience result type for graph-animate operations.
pub type GraphResult<T> = Result<T, GraphError>;

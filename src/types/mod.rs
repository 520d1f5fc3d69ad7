//! All data types for the graph-animate library.

pub mod edge;
pub mod error;
pub mod mode;
pub mod node;

pub use edge::{Edge, Weight};
pub use error::{GraphError, GraphResult};
pub use mode::TraversalMode;
pub use node::Node;

/// Radius of every node circle, in drawing units.
pub const NODE_RADIUS: f64 = 25.0;

/// Delay between two consecutive visit events, in milliseconds.
pub const STEP_DELAY_MS: u64 = 800;

/// Maximum number of nodes a single traversal run visits.
pub const MAX_VISITS: usize = 20;

/// Maximum DFS depth; nodes found deeper than this are not visited.
pub const MAX_DEPTH: usize = 20;

/// Distance between an edge midpoint and its weight label.
pub const WEIGHT_LABEL_OFFSET: f64 = 10.0;

/// Fill of a node that is not highlighted.
pub const BASE_COLOR: &str = "#2563eb";

/// Highlight fill used by breadth-first runs.
pub const BFS_COLOR: &str = "#10b981";

/// Highlight fill used by depth-first runs.
pub const DFS_COLOR: &str = "#ef4444";

/// Fill of edge weight labels.
pub const EDGE_LABEL_COLOR: &str = "#f59e0b";

/// Fill of the arrowhead marker on directed edges.
pub const ARROW_COLOR: &str = "#64748b";

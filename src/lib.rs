//! graph-animate — vector rendering of small graphs with animated traversals.
//!
//! Draws positioned nodes and edges into an addressable scene, then plays
//! breadth-first or depth-first visit orders over it as timed highlights.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod render;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, resolve_config, AnimationConfig};
pub use engine::{
    Animator, Clock, ManualClock, PlaybackReport, Player, SystemClock, Timeline, VisitEvent,
};
pub use format::{GraphReader, SvgWriter};
pub use graph::{plan_bfs, plan_dfs, AdjacencyList, GraphBuilder, GraphDescription};
pub use render::{Highlight, NodeHandle, RenderStyle, Scene, Stage, Surface};
pub use types::{
    Edge, GraphError, GraphResult, Node, TraversalMode, Weight, BASE_COLOR, BFS_COLOR, DFS_COLOR,
    MAX_DEPTH, MAX_VISITS, NODE_RADIUS, STEP_DELAY_MS,
};

//! Graph descriptions and traversal planning.

pub mod adjacency;
pub mod builder;
pub mod description;
pub mod traversal;

pub use adjacency::AdjacencyList;
pub use builder::GraphBuilder;
pub use description::GraphDescription;
pub use traversal::{plan, plan_bfs, plan_dfs};

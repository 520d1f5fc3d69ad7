//! Configuration loading from a TOML file or the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::render::RenderStyle;
use crate::types::{
    GraphResult, TraversalMode, BASE_COLOR, BFS_COLOR, DFS_COLOR, MAX_DEPTH, MAX_VISITS,
    NODE_RADIUS, STEP_DELAY_MS,
};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "GANIM_CONFIG";

/// Rendering and animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Delay between visit events, in milliseconds.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Maximum nodes visited per run.
    #[serde(default = "default_max_visits")]
    pub max_visits: usize,
    /// Maximum DFS depth.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Node circle radius.
    #[serde(default = "default_node_radius")]
    pub node_radius: f64,
    /// Fill of nodes that are not highlighted.
    #[serde(default = "default_base_color")]
    pub base_color: String,
    /// Highlight fill for BFS runs.
    #[serde(default = "default_bfs_color")]
    pub bfs_color: String,
    /// Highlight fill for DFS runs.
    #[serde(default = "default_dfs_color")]
    pub dfs_color: String,
    /// Width of surfaces created by the CLI.
    #[serde(default = "default_surface_width")]
    pub surface_width: u32,
    /// Height of surfaces created by the CLI.
    #[serde(default = "default_surface_height")]
    pub surface_height: u32,
}

fn default_step_delay_ms() -> u64 {
    STEP_DELAY_MS
}

fn default_max_visits() -> usize {
    MAX_VISITS
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}

fn default_node_radius() -> f64 {
    NODE_RADIUS
}

fn default_base_color() -> String {
    BASE_COLOR.to_string()
}

fn default_bfs_color() -> String {
    BFS_COLOR.to_string()
}

fn default_dfs_color() -> String {
    DFS_COLOR.to_string()
}

fn default_surface_width() -> u32 {
    600
}

fn default_surface_height() -> u32 {
    400
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
            max_visits: default_max_visits(),
            max_depth: default_max_depth(),
            node_radius: default_node_radius(),
            base_color: default_base_color(),
            bfs_color: default_bfs_color(),
            dfs_color: default_dfs_color(),
            surface_width: default_surface_width(),
            surface_height: default_surface_height(),
        }
    }
}

impl AnimationConfig {
    /// Highlight fill for the given mode.
    pub fn color_for(&self, mode: TraversalMode) -> &str {
        match mode {
            TraversalMode::Bfs => &self.bfs_color,
            TraversalMode::Dfs => &self.dfs_color,
        }
    }

    /// Node appearance for surfaces.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            node_radius: self.node_radius,
            base_color: self.base_color.clone(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<AnimationConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Resolve the configuration using priority order:
/// 1. Explicit path (CLI arg)
/// 2. GANIM_CONFIG environment variable
/// 3. Built-in defaults
pub fn resolve_config(explicit: Option<&Path>) -> GraphResult<AnimationConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        log::debug!("loading config from ${}={}", CONFIG_ENV_VAR, env_path);
        return load_config(Path::new(&env_path));
    }

    Ok(AnimationConfig::default())
}

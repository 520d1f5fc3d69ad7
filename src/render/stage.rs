//! A registry of drawing surfaces addressed by id.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::types::{Edge, Node};

use super::{Highlight, RenderStyle, Surface};

/// Owns every drawing surface a caller may target by id.
#[derive(Debug, Default)]
pub struct Stage {
    surfaces: HashMap<String, Surface>,
    style: RenderStyle,
}

impl Stage {
    /// Create a stage with no surfaces and the default node style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stage whose new surfaces use `style`.
    pub fn with_style(style: RenderStyle) -> Self {
        Self {
            surfaces: HashMap::new(),
            style,
        }
    }

    /// Register an empty surface, replacing any surface with the same id.
    pub fn add_surface(&mut self, id: &str, width: u32, height: u32) -> &mut Surface {
        let surface = Surface::with_style(id, width, height, self.style.clone());
        match self.surfaces.entry(id.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(surface);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(surface),
        }
    }

    /// Remove a surface, returning it.
    pub fn remove_surface(&mut self, id: &str) -> Option<Surface> {
        self.surfaces.remove(id)
    }

    /// Look up a surface.
    pub fn surface(&self, id: &str) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    /// Look up a surface mutably.
    pub fn surface_mut(&mut self, id: &str) -> Option<&mut Surface> {
        self.surfaces.get_mut(id)
    }

    /// Number of registered surfaces.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Clear the surface and draw the graph on it.
    ///
    /// Does nothing if no surface is registered under `surface_id`.
    pub fn render(&mut self, surface_id: &str, nodes: &[Node], edges: &[Edge]) {
        match self.surfaces.get_mut(surface_id) {
            Some(surface) => surface.draw(nodes, edges),
            None => log::debug!("render: no surface '{}'", surface_id),
        }
    }

    /// Restore every node on the surface to the base fill.
    ///
    /// Does nothing if no surface is registered under `surface_id`.
    pub fn reset_all(&mut self, surface_id: &str) {
        match self.surfaces.get_mut(surface_id) {
            Some(surface) => surface.reset_all(),
            None => log::debug!("reset: no surface '{}'", surface_id),
        }
    }
}

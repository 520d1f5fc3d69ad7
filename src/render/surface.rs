//! Drawing surfaces and the highlight capability exposed to the animator.

use std::collections::HashMap;

use crate::types::{Edge, Node, BASE_COLOR, NODE_RADIUS};

use super::scene::NODE_CLASS;
use super::{EdgeElement, NodeShape, Scene, SvgBuilder};

/// Opaque handle to a drawn node, owned by its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

/// Appearance settings shared by every node on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub node_radius: f64,
    pub base_color: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_radius: NODE_RADIUS,
            base_color: BASE_COLOR.to_string(),
        }
    }
}

/// The one thing the animator may do to a drawing: recolor nodes by index.
pub trait Highlight {
    /// Fill the node at `index`. Returns false if no such node is drawn.
    fn set_fill(&mut self, index: usize, color: &str) -> bool;

    /// Restore every drawn node to the base fill.
    fn reset_all(&mut self);
}

/// A named drawing target holding at most one scene.
#[derive(Debug, Clone)]
pub struct Surface {
    id: String,
    width: u32,
    height: u32,
    style: RenderStyle,
    scene: Scene,
    handles: HashMap<usize, NodeHandle>,
}

impl Surface {
    /// Create an empty surface.
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self::with_style(id, width, height, RenderStyle::default())
    }

    /// Create an empty surface with custom node appearance.
    pub fn with_style(id: impl Into<String>, width: u32, height: u32, style: RenderStyle) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            style,
            scene: Scene::default(),
            handles: HashMap::new(),
        }
    }

    /// Clear the surface and draw the given graph.
    pub fn draw(&mut self, nodes: &[Node], edges: &[Edge]) {
        self.clear();
        self.scene = Scene::build(
            nodes,
            edges,
            self.style.node_radius,
            &self.style.base_color,
        );
        self.handles = self
            .scene
            .nodes
            .iter()
            .enumerate()
            .map(|(pos, shape)| (shape.index, NodeHandle(pos)))
            .collect();
        log::debug!(
            "drew {} nodes and {} edges on '{}'",
            self.scene.nodes.len(),
            self.scene.line_count(),
            self.id
        );
    }

    /// Remove everything drawn on the surface.
    pub fn clear(&mut self) {
        self.scene = Scene::default();
        self.handles.clear();
    }

    /// Surface identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Width in drawing units.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in drawing units.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Node appearance settings.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// The current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Handle of the node drawn for `index`, if any.
    pub fn handle(&self, index: usize) -> Option<NodeHandle> {
        self.handles.get(&index).copied()
    }

    /// The shape behind a handle.
    pub fn shape(&self, handle: NodeHandle) -> Option<&NodeShape> {
        self.scene.nodes.get(handle.0)
    }

    /// Current fill of the node at `index`.
    pub fn fill_of(&self, index: usize) -> Option<&str> {
        self.handle(index)
            .and_then(|h| self.shape(h))
            .map(|s| s.fill.as_str())
    }

    /// Serialize the current scene to an SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = SvgBuilder::new(self.width, self.height);

        if let Some(marker) = &self.scene.marker {
            svg.open("defs", &[]);
            svg.open(
                "marker",
                &[
                    ("id", marker.id.to_string()),
                    ("markerWidth", marker.width.to_string()),
                    ("markerHeight", marker.height.to_string()),
                    ("refX", marker.ref_x.to_string()),
                    ("refY", marker.ref_y.to_string()),
                    ("orient", "auto".to_string()),
                ],
            );
            svg.empty(
                "polygon",
                &[
                    ("points", marker.points.to_string()),
                    ("fill", marker.fill.to_string()),
                ],
            );
            svg.close("marker");
            svg.close("defs");
        }

        svg.open("g", &[("id", "edges".to_string())]);
        for element in &self.scene.edges {
            match element {
                EdgeElement::Line(line) => {
                    let mut attrs = vec![
                        ("x1", line.x1.to_string()),
                        ("y1", line.y1.to_string()),
                        ("x2", line.x2.to_string()),
                        ("y2", line.y2.to_string()),
                        ("class", line.class.to_string()),
                    ];
                    if let Some(marker) = line.marker_end {
                        attrs.push(("marker-end", format!("url(#{marker})")));
                    }
                    svg.empty("line", &attrs);
                }
                EdgeElement::Weight(label) => {
                    svg.label(label);
                }
            }
        }
        svg.close("g");

        svg.open("g", &[("id", "nodes".to_string())]);
        for shape in &self.scene.nodes {
            svg.open(
                "g",
                &[
                    ("class", NODE_CLASS.to_string()),
                    ("id", shape.element_id()),
                ],
            );
            svg.empty(
                "circle",
                &[
                    ("cx", shape.cx.to_string()),
                    ("cy", shape.cy.to_string()),
                    ("r", shape.r.to_string()),
                    ("fill", shape.fill.clone()),
                ],
            );
            svg.label(&shape.label);
            svg.close("g");
        }
        svg.close("g");

        svg.finish()
    }
}

impl Highlight for Surface {
    fn set_fill(&mut self, index: usize, color: &str) -> bool {
        let Some(NodeHandle(pos)) = self.handle(index) else {
            log::debug!("no node {} on '{}'", index, self.id);
            return false;
        };
        match self.scene.nodes.get_mut(pos) {
            Some(shape) => {
                shape.fill = color.to_string();
                true
            }
            None => false,
        }
    }

    fn reset_all(&mut self) {
        for shape in &mut self.scene.nodes {
            shape.fill.clone_from(&self.style.base_color);
        }
    }
}

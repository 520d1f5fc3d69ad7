//! Scene model: the primitive shapes a render produces.

use serde::Serialize;

use crate::types::{Edge, Node, ARROW_COLOR, EDGE_LABEL_COLOR, WEIGHT_LABEL_OFFSET};

/// Class shared by every edge line.
pub const EDGE_CLASS: &str = "graph-edge";

/// Class of every edge weight label.
pub const EDGE_LABEL_CLASS: &str = "edge-label";

/// Class of every node group.
pub const NODE_CLASS: &str = "graph-node";

/// Id of the arrowhead marker referenced by directed edges.
pub const ARROWHEAD_ID: &str = "arrowhead";

/// Marker definition used to terminate directed edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowMarker {
    pub id: &'static str,
    pub width: f64,
    pub height: f64,
    pub ref_x: f64,
    pub ref_y: f64,
    pub points: &'static str,
    pub fill: &'static str,
}

impl Default for ArrowMarker {
    fn default() -> Self {
        Self {
            id: ARROWHEAD_ID,
            width: 10.0,
            height: 10.0,
            ref_x: 9.0,
            ref_y: 3.0,
            points: "0 0, 10 3, 0 6",
            fill: ARROW_COLOR,
        }
    }
}

/// A straight edge segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub class: &'static str,
    /// Marker id drawn at the end of the line, set for directed edges.
    pub marker_end: Option<&'static str>,
}

/// A text label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub class: Option<&'static str>,
    pub fill: &'static str,
    pub font_size: Option<u32>,
    /// Vertically centred on `y` instead of sitting on it.
    pub centered: bool,
}

/// An element of the edge layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EdgeElement {
    Line(Line),
    Weight(Label),
}

/// A node circle and its label, addressable by node index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeShape {
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub label: Label,
}

impl NodeShape {
    /// Element id of the group wrapping this node.
    pub fn element_id(&self) -> String {
        format!("node-{}", self.index)
    }
}

/// Everything drawn on a surface, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub marker: Option<ArrowMarker>,
    pub edges: Vec<EdgeElement>,
    pub nodes: Vec<NodeShape>,
}

impl Scene {
    /// Build the scene for a node and edge list.
    ///
    /// Edges naming a node that does not exist are skipped.
    pub fn build(nodes: &[Node], edges: &[Edge], radius: f64, base_color: &str) -> Self {
        let mut scene = Scene {
            marker: Some(ArrowMarker::default()),
            edges: Vec::with_capacity(edges.len() * 2),
            nodes: Vec::with_capacity(nodes.len()),
        };

        for edge in edges {
            let (Some(a), Some(b)) = (nodes.get(edge.from), nodes.get(edge.to)) else {
                log::debug!("skipping edge {} -> {}: no such node", edge.from, edge.to);
                continue;
            };

            scene.edges.push(EdgeElement::Line(Line {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
                class: EDGE_CLASS,
                marker_end: edge.directed.then_some(ARROWHEAD_ID),
            }));

            if let Some(text) = edge.label() {
                let (x, y) = weight_label_position(a, b);
                scene.edges.push(EdgeElement::Weight(Label {
                    x,
                    y,
                    text,
                    class: Some(EDGE_LABEL_CLASS),
                    fill: EDGE_LABEL_COLOR,
                    font_size: None,
                    centered: false,
                }));
            }
        }

        for (index, node) in nodes.iter().enumerate() {
            scene.nodes.push(NodeShape {
                index,
                cx: node.x,
                cy: node.y,
                r: radius,
                fill: base_color.to_string(),
                label: Label {
                    x: node.x,
                    y: node.y,
                    text: node.label.clone(),
                    class: None,
                    fill: "white",
                    font_size: Some(14),
                    centered: true,
                },
            });
        }

        scene
    }

    /// Number of edge lines.
    pub fn line_count(&self) -> usize {
        self.edges
            .iter()
            .filter(|e| matches!(e, EdgeElement::Line(_)))
            .count()
    }

    /// Weight labels, in edge order.
    pub fn weight_labels(&self) -> Vec<&Label> {
        self.edges
            .iter()
            .filter_map(|e| match e {
                EdgeElement::Weight(label) => Some(label),
                EdgeElement::Line(_) => None,
            })
            .collect()
    }

    /// Lines that end in an arrowhead.
    pub fn arrow_count(&self) -> usize {
        self.edges
            .iter()
            .filter(|e| matches!(e, EdgeElement::Line(l) if l.marker_end.is_some()))
            .count()
    }
}

/// Midpoint of `a`-`b`, moved `WEIGHT_LABEL_OFFSET` along the line's normal.
///
/// The upward normal is used; vertical lines take the leftward one and
/// zero-length lines fall back to straight up.
fn weight_label_position(a: &Node, b: &Node) -> (f64, f64) {
    let mid_x = (a.x + b.x) / 2.0;
    let mid_y = (a.y + b.y) / 2.0;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = dx.hypot(dy);
    if len == 0.0 {
        return (mid_x, mid_y - WEIGHT_LABEL_OFFSET);
    }

    let (mut nx, mut ny) = (dy / len, -dx / len);
    if ny > 0.0 || (ny == 0.0 && nx > 0.0) {
        nx = -nx;
        ny = -ny;
    }
    (
        mid_x + nx * WEIGHT_LABEL_OFFSET,
        mid_y + ny * WEIGHT_LABEL_OFFSET,
    )
}

//! Static scene rendering — nodes, edges, labels and arrowheads.

pub mod scene;
pub mod stage;
pub mod surface;
pub mod svg;

pub use scene::{ArrowMarker, EdgeElement, Label, Line, NodeShape, Scene};
pub use stage::Stage;
pub use surface::{Highlight, NodeHandle, RenderStyle, Surface};
pub use svg::SvgBuilder;

//! File I/O for graph descriptions, scenes and animation frames.

pub mod reader;
pub mod writer;

pub use reader::GraphReader;
pub use writer::SvgWriter;

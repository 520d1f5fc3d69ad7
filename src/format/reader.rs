//! Reads graph descriptions from JSON.

use std::io::Read;
use std::path::Path;

use crate::graph::GraphDescription;
use crate::types::GraphResult;

/// Reader for JSON graph description files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph description from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<GraphDescription> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Read a graph description from any reader.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<GraphDescription> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        GraphDescription::from_json(&content)
    }
}

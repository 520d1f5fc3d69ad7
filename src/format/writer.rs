//! Writes rendered scenes and animation frames as SVG files.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::engine::Timeline;
use crate::render::Surface;
use crate::types::GraphResult;

/// Writer for SVG documents.
pub struct SvgWriter;

impl SvgWriter {
    /// Write the surface's current scene to a file.
    pub fn write_to_file(surface: &Surface, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(surface, &mut writer)
    }

    /// Write the surface's current scene to any writer.
    pub fn write_to(surface: &Surface, writer: &mut impl Write) -> GraphResult<()> {
        writer.write_all(surface.to_svg().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Path of the frame file for a given step.
    pub fn frame_path(dir: &Path, step: usize) -> PathBuf {
        dir.join(format!("frame-{:03}.svg", step))
    }

    /// Write one file for the base scene (`frame-000.svg`) and one per
    /// visit step (`frame-001.svg`, ...). Returns the written paths.
    pub fn write_frames(
        timeline: &Timeline,
        surface: &Surface,
        dir: &Path,
    ) -> GraphResult<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;

        let base = Self::frame_path(dir, 0);
        std::fs::write(&base, surface.to_svg())?;
        let mut paths = vec![base];

        for (i, frame) in timeline.frames(surface).into_iter().enumerate() {
            let path = Self::frame_path(dir, i + 1);
            std::fs::write(&path, frame)?;
            paths.push(path);
        }
        log::debug!("wrote {} frames to {}", paths.len(), dir.display());
        Ok(paths)
    }
}

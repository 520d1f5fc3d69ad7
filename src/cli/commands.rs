//! CLI command implementations.

use std::path::Path;

use crate::config::AnimationConfig;
use crate::engine::{Animator, ManualClock, Player, SystemClock};
use crate::format::{GraphReader, SvgWriter};
use crate::graph::GraphDescription;
use crate::render::{Stage, Surface};
use crate::types::{GraphError, GraphResult, TraversalMode};

/// Surface id used for every CLI drawing.
const SURFACE_ID: &str = "graph-visualization";

/// Read, validate and draw a graph description on a fresh surface.
fn load_and_draw(
    path: &Path,
    config: &AnimationConfig,
) -> GraphResult<(GraphDescription, Stage)> {
    let graph = GraphReader::read_from_file(path)?;
    graph.validate()?;

    let mut stage = Stage::with_style(config.render_style());
    stage.add_surface(SURFACE_ID, config.surface_width, config.surface_height);
    stage.render(SURFACE_ID, &graph.nodes, &graph.edges);
    Ok((graph, stage))
}

fn drawn_surface(stage: &Stage) -> GraphResult<&Surface> {
    stage
        .surface(SURFACE_ID)
        .ok_or_else(|| GraphError::SurfaceNotFound(SURFACE_ID.to_string()))
}

fn check_start(graph: &GraphDescription, start: usize) -> GraphResult<()> {
    if start < graph.node_count() {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange {
            index: start,
            len: graph.node_count(),
        })
    }
}

/// Draw a graph and write it as SVG to a file, or to stdout.
pub fn cmd_render(path: &Path, out: Option<&Path>, config: &AnimationConfig) -> GraphResult<()> {
    let (_, stage) = load_and_draw(path, config)?;
    let surface = drawn_surface(&stage)?;

    match out {
        Some(out) => {
            SvgWriter::write_to_file(surface, out)?;
            eprintln!("Wrote {}", out.display());
        }
        None => SvgWriter::write_to(surface, &mut std::io::stdout().lock())?,
    }
    Ok(())
}

/// Print the planned visit timeline of a traversal.
pub fn cmd_traverse(
    path: &Path,
    mode: TraversalMode,
    start: usize,
    config: &AnimationConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    graph.validate()?;
    check_start(&graph, start)?;

    let animator = Animator::with_clock(config.clone(), ManualClock::new());
    let timeline = animator.plan(start, &graph.adjacency(), mode);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&timeline).unwrap_or_default()
        );
    } else {
        println!(
            "{} from node {}: {} visits over {} ms",
            mode.name().to_uppercase(),
            start,
            timeline.len(),
            timeline.duration_ms()
        );
        for event in &timeline.events {
            let label = graph
                .nodes
                .get(event.node)
                .map(|n| n.label.as_str())
                .unwrap_or("?");
            println!(
                "  [{:>5} ms] step {:>2}: node {} ({})",
                event.at_ms, event.step, event.node, label
            );
        }
    }
    Ok(())
}

/// Write one SVG frame per traversal step into `out_dir`.
///
/// With `realtime`, frames are written as playback reaches each step,
/// spaced by the configured delay.
pub fn cmd_animate(
    path: &Path,
    mode: TraversalMode,
    start: usize,
    out_dir: &Path,
    realtime: bool,
    config: &AnimationConfig,
    json: bool,
) -> GraphResult<()> {
    let (graph, mut stage) = load_and_draw(path, config)?;
    check_start(&graph, start)?;

    let animator = Animator::with_clock(config.clone(), ManualClock::new());
    let timeline = animator.plan(start, &graph.adjacency(), mode);

    let written = if realtime {
        std::fs::create_dir_all(out_dir)?;
        let surface = stage
            .surface_mut(SURFACE_ID)
            .ok_or_else(|| GraphError::SurfaceNotFound(SURFACE_ID.to_string()))?;
        let base = SvgWriter::frame_path(out_dir, 0);
        SvgWriter::write_to_file(surface, &base)?;

        let mut paths = vec![base];
        let mut failure: Option<GraphError> = None;
        let mut player = Player::new(SystemClock::new());
        player.play_with(&timeline, surface, |event, surface| {
            if failure.is_some() {
                return;
            }
            let path = SvgWriter::frame_path(out_dir, event.step + 1);
            match SvgWriter::write_to_file(surface, &path) {
                Ok(()) => paths.push(path),
                Err(e) => failure = Some(e),
            }
        });
        if let Some(e) = failure {
            return Err(e);
        }
        paths
    } else {
        SvgWriter::write_frames(&timeline, drawn_surface(&stage)?, out_dir)?
    };

    if json {
        let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        println!(
            "{}",
            serde_json::json!({
                "mode": mode.name(),
                "start": start,
                "order": timeline.order(),
                "frames": files,
            })
        );
    } else {
        println!(
            "Wrote {} frames to {} ({} order: {:?})",
            written.len(),
            out_dir.display(),
            mode.name().to_uppercase(),
            timeline.order()
        );
    }
    Ok(())
}

/// Display counts for a graph description.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let directed = graph.edges.iter().filter(|e| e.directed).count();
    let weighted = graph.edges.iter().filter(|e| e.label().is_some()).count();
    let valid = graph.validate().is_ok();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "directed_edges": directed,
            "weighted_edges": weighted,
            "explicit_adjacency": graph.adjacency_list.is_some(),
            "valid": valid,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("  Directed: {}", directed);
        println!("  Weighted: {}", weighted);
        println!(
            "Adjacency: {}",
            if graph.adjacency_list.is_some() {
                "explicit"
            } else {
                "derived from edges"
            }
        );
        println!("Valid: {}", if valid { "yes" } else { "no" });
    }
    Ok(())
}

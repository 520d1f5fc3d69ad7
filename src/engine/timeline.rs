//! Visit timelines — when each node gets highlighted, and in what color.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::render::{Highlight, Surface};
use crate::types::TraversalMode;

/// One highlight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEvent {
    /// Position in the run, starting at 0.
    pub step: usize,
    /// Index of the node to highlight.
    pub node: usize,
    /// Offset from the start of the run, in milliseconds.
    pub at_ms: u64,
    /// Fill applied to the node.
    pub color: String,
}

/// A planned traversal run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub mode: TraversalMode,
    pub start: usize,
    pub step_delay_ms: u64,
    pub events: Vec<VisitEvent>,
}

impl Timeline {
    /// Space a visit order out by `step_delay_ms`.
    pub fn new(
        mode: TraversalMode,
        start: usize,
        order: &[usize],
        color: &str,
        step_delay_ms: u64,
    ) -> Self {
        let events = order
            .iter()
            .enumerate()
            .map(|(step, &node)| VisitEvent {
                step,
                node,
                at_ms: step as u64 * step_delay_ms,
                color: color.to_string(),
            })
            .collect();
        Self {
            mode,
            start,
            step_delay_ms,
            events,
        }
    }

    /// Node indices in visit order.
    pub fn order(&self) -> Vec<usize> {
        self.events.iter().map(|e| e.node).collect()
    }

    /// Delay between two consecutive events.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Number of visit events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the run visits nothing.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Offset of the last event, in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.events.last().map(|e| e.at_ms).unwrap_or(0)
    }

    /// One SVG snapshot per step, each taken after applying that step to a
    /// copy of `surface`. The surface itself is left untouched.
    pub fn frames(&self, surface: &Surface) -> Vec<String> {
        let mut working = surface.clone();
        self.events
            .iter()
            .map(|event| {
                working.set_fill(event.node, &event.color);
                working.to_svg()
            })
            .collect()
    }
}

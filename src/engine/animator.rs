//! Traversal animation: plan a visit order, then play it on a surface.

use serde::Serialize;

use crate::config::AnimationConfig;
use crate::graph::{plan, AdjacencyList};
use crate::render::{Highlight, Stage};
use crate::types::TraversalMode;

use super::{Clock, SystemClock, Timeline, VisitEvent};

/// Outcome of playing a timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackReport {
    /// Events that recolored a node.
    pub applied: usize,
    /// Events whose node was not drawn.
    pub missing: usize,
}

/// Applies timeline events to a highlight target, one step per delay.
///
/// Steps run sequentially on the calling thread; nothing prevents two
/// players from targeting the same surface.
pub struct Player<C: Clock> {
    clock: C,
}

impl<C: Clock> Player<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The clock driving playback.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Play every event of `timeline` on `target`.
    pub fn play<H: Highlight>(&mut self, timeline: &Timeline, target: &mut H) -> PlaybackReport {
        self.play_with(timeline, target, |_, _| {})
    }

    /// Play `timeline`, calling `observe` after each event is applied.
    pub fn play_with<H, F>(
        &mut self,
        timeline: &Timeline,
        target: &mut H,
        mut observe: F,
    ) -> PlaybackReport
    where
        H: Highlight,
        F: FnMut(&VisitEvent, &H),
    {
        let delay = timeline.step_delay();
        let mut report = PlaybackReport::default();

        for (i, event) in timeline.events.iter().enumerate() {
            if i > 0 {
                self.clock.wait(delay);
            }
            if target.set_fill(event.node, &event.color) {
                report.applied += 1;
            } else {
                report.missing += 1;
            }
            observe(event, &*target);
        }

        log::info!(
            "{} completed: {} visited, {} missing",
            timeline.mode,
            report.applied,
            report.missing
        );
        report
    }
}

/// Plans and plays BFS/DFS runs with a fixed configuration.
pub struct Animator<C: Clock = SystemClock> {
    config: AnimationConfig,
    player: Player<C>,
}

impl Animator<SystemClock> {
    /// Create an animator that waits in real time.
    pub fn new(config: AnimationConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> Animator<C> {
    /// Create an animator driven by a custom clock.
    pub fn with_clock(config: AnimationConfig, clock: C) -> Self {
        Self {
            config,
            player: Player::new(clock),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// The clock driving playback.
    pub fn clock(&self) -> &C {
        self.player.clock()
    }

    /// Plan a run without playing it.
    pub fn plan(&self, start: usize, adjacency: &AdjacencyList, mode: TraversalMode) -> Timeline {
        let order = plan(
            mode,
            start,
            adjacency,
            self.config.max_visits,
            self.config.max_depth,
        );
        Timeline::new(
            mode,
            start,
            &order,
            self.config.color_for(mode),
            self.config.step_delay_ms,
        )
    }

    /// Traverse from `start` and highlight each visited node on the surface.
    ///
    /// Does not reset earlier highlights. Returns None, doing nothing, if no
    /// surface is registered under `surface_id`.
    pub fn animate(
        &mut self,
        stage: &mut Stage,
        surface_id: &str,
        start: usize,
        adjacency: &AdjacencyList,
        mode: TraversalMode,
    ) -> Option<PlaybackReport> {
        let Some(surface) = stage.surface_mut(surface_id) else {
            log::debug!("animate: no surface '{}'", surface_id);
            return None;
        };
        let timeline = self.plan(start, adjacency, mode);
        Some(self.player.play(&timeline, surface))
    }
}

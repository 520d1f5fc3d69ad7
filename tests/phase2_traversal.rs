//! Phase 2 tests: traversal planning + animation playback.

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

use rand::Rng;

use graph_animate::config::AnimationConfig;
use graph_animate::engine::{Animator, Clock, ManualClock, Player, Timeline};
use graph_animate::graph::{plan_bfs, plan_dfs, AdjacencyList, GraphDescription};
use graph_animate::render::{Highlight, Stage, Surface};
use graph_animate::types::{
    Edge, Node, TraversalMode, BASE_COLOR, BFS_COLOR, DFS_COLOR, MAX_DEPTH, MAX_VISITS,
    STEP_DELAY_MS,
};

// ==================== Helper ====================

fn nodes(count: usize) -> Vec<Node> {
    (0..count)
        .map(|i| Node::new(50.0 * i as f64, 100.0, format!("N{}", i)))
        .collect()
}

fn adjacency(entries: Vec<(usize, Vec<usize>)>) -> AdjacencyList {
    entries.into_iter().collect()
}

fn chain(len: usize) -> AdjacencyList {
    (0..len)
        .map(|i| {
            let next = if i + 1 < len { vec![i + 1] } else { vec![] };
            (i, next)
        })
        .collect()
}

fn manual_animator() -> Animator<ManualClock> {
    Animator::with_clock(AnimationConfig::default(), ManualClock::new())
}

fn stage_with(count: usize) -> Stage {
    let mut stage = Stage::new();
    stage.add_surface("graph", 800, 400);
    stage.render("graph", &nodes(count), &[]);
    stage
}

/// Hop distance from `start` to every reachable node.
fn hop_distances(start: usize, adj: &AdjacencyList) -> HashMap<usize, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(n) = queue.pop_front() {
        let d = dist[&n];
        for &m in adj.neighbors(n) {
            if !dist.contains_key(&m) {
                dist.insert(m, d + 1);
                queue.push_back(m);
            }
        }
    }
    dist
}

fn random_adjacency(rng: &mut impl Rng, count: usize, degree: usize) -> AdjacencyList {
    (0..count)
        .map(|i| {
            let neighbors = (0..degree).map(|_| rng.gen_range(0..count)).collect();
            (i, neighbors)
        })
        .collect()
}

// ==================== Adjacency Tests ====================

#[test]
fn test_adjacency_from_edges() {
    let edges = vec![
        Edge::new(0, 1),
        Edge::directed(1, 2),
        Edge::new(0, 2),
        Edge::new(1, 0),
    ];
    let adj = AdjacencyList::from_edges(&edges);

    assert_eq!(adj.neighbors(0), &[1, 2]);
    assert_eq!(adj.neighbors(1), &[0, 2]);
    assert_eq!(adj.neighbors(2), &[0]);
    assert!(adj.neighbors(9).is_empty());
    assert!(!adj.contains(9));
}

#[test]
fn test_adjacency_json_keys() {
    let adj: AdjacencyList = serde_json::from_str(r#"{"0": [1, 2], "2": []}"#).unwrap();
    assert_eq!(adj.neighbors(0), &[1, 2]);
    assert!(adj.contains(2));
    assert_eq!(adj.len(), 2);
}

#[test]
fn test_description_prefers_explicit_adjacency() {
    let mut graph = GraphDescription::new(nodes(3), vec![Edge::new(0, 1), Edge::new(1, 2)]);
    assert_eq!(graph.adjacency().neighbors(1), &[0, 2]);

    graph.adjacency_list = Some(adjacency(vec![(1, vec![2])]));
    assert_eq!(graph.adjacency().neighbors(1), &[2]);
    assert!(graph.adjacency().neighbors(0).is_empty());
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_three_node_chain() {
    let adj = adjacency(vec![(0, vec![1]), (1, vec![2]), (2, vec![])]);
    let mut stage = stage_with(3);
    let mut animator = manual_animator();

    let timeline = animator.plan(0, &adj, TraversalMode::Bfs);
    assert_eq!(timeline.order(), vec![0, 1, 2]);
    let times: Vec<u64> = timeline.events.iter().map(|e| e.at_ms).collect();
    assert_eq!(times, vec![0, STEP_DELAY_MS, 2 * STEP_DELAY_MS]);

    let report = animator
        .animate(&mut stage, "graph", 0, &adj, TraversalMode::Bfs)
        .unwrap();
    assert_eq!(report.applied, 3);
    assert_eq!(report.missing, 0);
    assert_eq!(animator.clock().waits(), 2);
    assert_eq!(
        animator.clock().elapsed(),
        Duration::from_millis(2 * STEP_DELAY_MS)
    );

    let surface = stage.surface("graph").unwrap();
    for i in 0..3 {
        assert_eq!(surface.fill_of(i), Some(BFS_COLOR));
    }
}

#[test]
fn test_bfs_level_order() {
    //        0
    //      /   \
    //     1     2
    //    / \     \
    //   3   4     5
    let adj = adjacency(vec![(0, vec![1, 2]), (1, vec![3, 4]), (2, vec![5])]);
    assert_eq!(plan_bfs(0, &adj, MAX_VISITS), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(plan_bfs(1, &adj, MAX_VISITS), vec![1, 3, 4]);
}

#[test]
fn test_bfs_marks_at_enqueue() {
    // 3 is reachable from both 1 and 2 but appears once.
    let adj = adjacency(vec![(0, vec![1, 2]), (1, vec![3, 0]), (2, vec![3]), (3, vec![0])]);
    assert_eq!(plan_bfs(0, &adj, MAX_VISITS), vec![0, 1, 2, 3]);
}

#[test]
fn test_bfs_step_cap() {
    let adj = chain(30);
    let order = plan_bfs(0, &adj, MAX_VISITS);
    assert_eq!(order.len(), MAX_VISITS);
    assert_eq!(order, (0..20).collect::<Vec<_>>());
    assert!(plan_bfs(0, &adj, 0).is_empty());
}

#[test]
fn test_bfs_missing_adjacency_entry() {
    let adj = adjacency(vec![(1, vec![2])]);
    assert_eq!(plan_bfs(0, &adj, MAX_VISITS), vec![0]);
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_strict_depth_first_order() {
    let adj = adjacency(vec![(0, vec![1, 2]), (1, vec![3, 4]), (2, vec![5]), (3, vec![6])]);
    assert_eq!(
        plan_dfs(0, &adj, MAX_VISITS, MAX_DEPTH),
        vec![0, 1, 3, 6, 4, 2, 5]
    );
}

#[test]
fn test_dfs_cycle_visits_once() {
    let adj = adjacency(vec![(0, vec![1, 2]), (1, vec![2, 0]), (2, vec![0, 1])]);
    assert_eq!(plan_dfs(0, &adj, MAX_VISITS, MAX_DEPTH), vec![0, 1, 2]);
}

#[test]
fn test_dfs_visit_cap() {
    let star: Vec<usize> = (1..40).collect();
    let adj = adjacency(vec![(0, star)]);
    let order = plan_dfs(0, &adj, MAX_VISITS, MAX_DEPTH);
    assert_eq!(order.len(), MAX_VISITS);
    assert_eq!(order, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_dfs_depth_cap() {
    let adj = chain(40);
    let order = plan_dfs(0, &adj, 100, MAX_DEPTH);
    // Depths 0 through 20 inclusive.
    assert_eq!(order.len(), MAX_DEPTH + 1);
    assert_eq!(order.last(), Some(&MAX_DEPTH));
}

#[test]
fn test_dfs_animation_color() {
    let adj = adjacency(vec![(0, vec![1]), (1, vec![2])]);
    let mut stage = stage_with(4);
    let mut animator = manual_animator();

    animator.animate(&mut stage, "graph", 0, &adj, TraversalMode::Dfs);

    let surface = stage.surface("graph").unwrap();
    assert_eq!(surface.fill_of(0), Some(DFS_COLOR));
    assert_eq!(surface.fill_of(2), Some(DFS_COLOR));
    assert_eq!(surface.fill_of(3), Some(BASE_COLOR));
}

// ==================== Random Graph Tests ====================

#[test]
fn test_random_graphs_respect_invariants() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let count = rng.gen_range(1..60);
        let degree = rng.gen_range(0..5);
        let adj = random_adjacency(&mut rng, count, degree);
        let start = rng.gen_range(0..count);

        let bfs = plan_bfs(start, &adj, MAX_VISITS);
        let dfs = plan_dfs(start, &adj, MAX_VISITS, MAX_DEPTH);
        let dist = hop_distances(start, &adj);

        for order in [&bfs, &dfs] {
            assert!(order.len() <= MAX_VISITS);
            assert_eq!(order.first(), Some(&start));
            let unique: HashSet<usize> = order.iter().copied().collect();
            assert_eq!(unique.len(), order.len());
            assert!(order.iter().all(|n| dist.contains_key(n)));
            assert_eq!(order.len(), dist.len().min(MAX_VISITS));
        }

        // BFS visits in non-decreasing hop distance.
        for pair in bfs.windows(2) {
            assert!(dist[&pair[0]] <= dist[&pair[1]]);
        }
    }
}

// ==================== Playback Tests ====================

#[test]
fn test_animate_missing_surface_is_noop() {
    let mut stage = stage_with(3);
    let mut animator = manual_animator();
    let adj = chain(3);

    let report = animator.animate(&mut stage, "missing", 0, &adj, TraversalMode::Bfs);
    assert!(report.is_none());
    assert_eq!(animator.clock().waits(), 0);
    assert_eq!(stage.surface("graph").unwrap().fill_of(0), Some(BASE_COLOR));
}

#[test]
fn test_animate_missing_node_continues() {
    // Node 5 is in the adjacency list but was never drawn.
    let adj = adjacency(vec![(0, vec![5, 1]), (1, vec![2])]);
    let mut stage = stage_with(3);
    let mut animator = manual_animator();

    let report = animator
        .animate(&mut stage, "graph", 0, &adj, TraversalMode::Bfs)
        .unwrap();
    assert_eq!(report.applied, 3);
    assert_eq!(report.missing, 1);
    assert_eq!(stage.surface("graph").unwrap().fill_of(2), Some(BFS_COLOR));
}

#[test]
fn test_reset_after_run() {
    let adj = chain(10);
    let mut stage = stage_with(10);
    let mut animator = manual_animator();

    animator.animate(&mut stage, "graph", 0, &adj, TraversalMode::Bfs);
    stage.reset_all("graph");

    let surface = stage.surface("graph").unwrap();
    for i in 0..10 {
        assert_eq!(surface.fill_of(i), Some(BASE_COLOR));
    }
}

#[test]
fn test_stale_highlights_without_reset() {
    let adj = adjacency(vec![(0, vec![1]), (1, vec![]), (2, vec![3]), (3, vec![])]);
    let mut stage = stage_with(4);
    let mut animator = manual_animator();

    animator.animate(&mut stage, "graph", 0, &adj, TraversalMode::Dfs);
    animator.animate(&mut stage, "graph", 2, &adj, TraversalMode::Bfs);

    let surface = stage.surface("graph").unwrap();
    assert_eq!(surface.fill_of(0), Some(DFS_COLOR));
    assert_eq!(surface.fill_of(1), Some(DFS_COLOR));
    assert_eq!(surface.fill_of(2), Some(BFS_COLOR));
    assert_eq!(surface.fill_of(3), Some(BFS_COLOR));
}

#[test]
fn test_custom_config_colors_and_delay() {
    let config = AnimationConfig {
        step_delay_ms: 50,
        max_visits: 2,
        bfs_color: "#000000".to_string(),
        ..AnimationConfig::default()
    };
    let mut animator = Animator::with_clock(config, ManualClock::new());
    let mut stage = stage_with(5);

    let report = animator
        .animate(&mut stage, "graph", 0, &chain(5), TraversalMode::Bfs)
        .unwrap();
    assert_eq!(report.applied, 2);
    assert_eq!(animator.clock().elapsed(), Duration::from_millis(50));

    let surface = stage.surface("graph").unwrap();
    assert_eq!(surface.fill_of(1), Some("#000000"));
    assert_eq!(surface.fill_of(2), Some(BASE_COLOR));
}

#[test]
fn test_player_observes_each_step() {
    let timeline = Timeline::new(TraversalMode::Dfs, 0, &[0, 2, 1], DFS_COLOR, 100);
    let mut surface = Surface::new("s", 300, 300);
    surface.draw(&nodes(3), &[]);

    let mut seen = Vec::new();
    let mut player = Player::new(ManualClock::new());
    player.play_with(&timeline, &mut surface, |event, target| {
        let colored = (0..3)
            .filter(|&i| target.fill_of(i) == Some(DFS_COLOR))
            .count();
        seen.push((event.node, colored));
    });

    assert_eq!(seen, vec![(0, 1), (2, 2), (1, 3)]);
    assert_eq!(player.clock().waits(), 2);
}

#[test]
fn test_timeline_frames() {
    let timeline = Timeline::new(TraversalMode::Bfs, 0, &[0, 1], BFS_COLOR, STEP_DELAY_MS);
    let mut surface = Surface::new("s", 300, 300);
    surface.draw(&nodes(2), &[]);

    let frames = timeline.frames(&surface);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].matches(BFS_COLOR).count(), 1);
    assert_eq!(frames[1].matches(BFS_COLOR).count(), 2);
    assert_eq!(timeline.duration_ms(), STEP_DELAY_MS);
    assert_eq!(timeline.step_delay(), Duration::from_millis(STEP_DELAY_MS));
    // The source surface is untouched.
    assert_eq!(surface.fill_of(0), Some(BASE_COLOR));
    assert!(!surface.set_fill(5, BFS_COLOR));
}

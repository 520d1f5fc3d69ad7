//! Traversal planning (BFS and DFS) over an adjacency list.
//!
//! Planning is pure: it yields the order in which nodes get highlighted and
//! leaves timing to the animation engine.

use std::collections::{HashSet, VecDeque};

use crate::types::TraversalMode;

use super::AdjacencyList;

/// Plan a traversal in the given mode.
pub fn plan(
    mode: TraversalMode,
    start: usize,
    adjacency: &AdjacencyList,
    max_visits: usize,
    max_depth: usize,
) -> Vec<usize> {
    match mode {
        TraversalMode::Bfs => plan_bfs(start, adjacency, max_visits),
        TraversalMode::Dfs => plan_dfs(start, adjacency, max_visits, max_depth),
    }
}

/// Breadth-first visit order from `start`, at most `max_visits` long.
///
/// Neighbors are marked visited when enqueued, so a node reachable along
/// several paths is still visited once, at its first discovery.
pub fn plan_bfs(start: usize, adjacency: &AdjacencyList, max_visits: usize) -> Vec<usize> {
    let mut visited: HashSet<usize> = HashSet::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut order: Vec<usize> = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while order.len() < max_visits {
        let Some(current) = queue.pop_front() else {
            break;
        };
        order.push(current);

        for &neighbor in adjacency.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!("bfs from {} planned {} visits", start, order.len());
    order
}

/// Depth-first visit order from `start`.
///
/// Uses an explicit stack of `(node, depth)` pairs, exploring neighbors in
/// adjacency order. Nodes deeper than `max_depth` are not visited and the
/// visited set never grows beyond `max_visits`.
pub fn plan_dfs(
    start: usize,
    adjacency: &AdjacencyList,
    max_visits: usize,
    max_depth: usize,
) -> Vec<usize> {
    let mut visited: HashSet<usize> = HashSet::new();
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    let mut order: Vec<usize> = Vec::new();

    while let Some((node, depth)) = stack.pop() {
        if order.len() >= max_visits {
            break;
        }
        if depth > max_depth || !visited.insert(node) {
            continue;
        }
        order.push(node);

        // Reversed so the first neighbor is popped first.
        for &neighbor in adjacency.neighbors(node).iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push((neighbor, depth + 1));
            }
        }
    }

    log::debug!("dfs from {} planned {} visits", start, order.len());
    order
}

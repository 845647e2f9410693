//! A* search over a floor's node graph.

use crate::error::NavError;
use crate::graph::{Floor, NodeId};
use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::types::{OpenEntry, SearchResult};

/// Run A* from `start` to `goal` on `floor`.
///
/// Edge cost is `distance(a, b) * cost_multiplier(b)`: the multiplier of the
/// node being entered applies. The heuristic is the straight-line distance
/// to the goal, which is only admissible while every multiplier is ≥ 1.
///
/// Closed nodes are never reopened. On graphs with strongly non-uniform
/// multipliers this can return a route that is not the cheapest one.
///
/// Only declared outgoing links are followed. Non-walkable neighbors and
/// neighbor ids that resolve to no node are skipped.
pub fn search(floor: &Floor, start: NodeId, goal: NodeId) -> Result<SearchResult, NavError> {
    trace!("[AStar] search: floor={} start={} goal={}", floor.level, start, goal);

    let no_path = NavError::NoPath { start, goal };
    let goal_pos = floor.node(goal).ok_or_else(|| no_path.clone())?.position;
    let start_node = floor.node(start).ok_or_else(|| no_path.clone())?;

    let mut open_set = BinaryHeap::new();
    let mut closed_set: HashSet<NodeId> = HashSet::new();
    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
    let mut g_scores: HashMap<NodeId, f32> = HashMap::new();
    let mut seq: u64 = 0;

    let h_start = start_node.position.distance(&goal_pos);
    open_set.push(OpenEntry {
        node: start,
        g_cost: 0.0,
        h_cost: h_start,
        f_cost: h_start,
        seq,
    });
    g_scores.insert(start, 0.0);

    let mut nodes_expanded = 0;

    while let Some(current) = open_set.pop() {
        if closed_set.contains(&current.node) {
            continue;
        }

        // Goal reached
        if current.node == goal {
            let chain = reconstruct_chain(&came_from, start, goal);
            trace!(
                "[AStar] SUCCESS: {} nodes, cost={:.2}, nodes_expanded={}",
                chain.len(),
                current.g_cost,
                nodes_expanded
            );
            return Ok(SearchResult {
                chain,
                cost: current.g_cost,
                nodes_expanded,
            });
        }

        closed_set.insert(current.node);
        nodes_expanded += 1;

        let Some(node) = floor.node(current.node) else {
            continue;
        };

        for &neighbor_id in &node.neighbors {
            if closed_set.contains(&neighbor_id) {
                continue;
            }

            let Some(neighbor) = floor.node(neighbor_id) else {
                trace!(
                    "[AStar] skipping dangling edge {} -> {}",
                    current.node, neighbor_id
                );
                continue;
            };

            if !neighbor.walkable {
                continue;
            }

            let step = node.position.distance(&neighbor.position) * neighbor.cost_multiplier;
            let tentative_g = current.g_cost + step;

            let known_g = g_scores.get(&neighbor_id).copied().unwrap_or(f32::INFINITY);
            if tentative_g < known_g {
                came_from.insert(neighbor_id, current.node);
                g_scores.insert(neighbor_id, tentative_g);

                let h = neighbor.position.distance(&goal_pos);
                seq += 1;
                open_set.push(OpenEntry {
                    node: neighbor_id,
                    g_cost: tentative_g,
                    h_cost: h,
                    f_cost: tentative_g + h,
                    seq,
                });
            }
        }
    }

    debug!(
        "[AStar] FAILED: NoPath {} -> {} after expanding {} nodes",
        start, goal, nodes_expanded
    );
    Err(no_path)
}

/// Walk back-pointers from goal to start, returning start → goal order.
fn reconstruct_chain(
    came_from: &HashMap<NodeId, NodeId>,
    start: NodeId,
    goal: NodeId,
) -> Vec<NodeId> {
    let mut chain = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                chain.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    chain.reverse();
    chain
}

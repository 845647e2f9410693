//! A* search types.

use crate::graph::NodeId;
use std::cmp::Ordering;

/// An entry in the A* open set
#[derive(Clone, Debug)]
pub(super) struct OpenEntry {
    pub node: NodeId,
    pub g_cost: f32, // Cost from start
    pub h_cost: f32, // Straight-line distance to goal
    pub f_cost: f32, // g_cost + h_cost
    pub seq: u64,    // Insertion order
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: lowest f, then lowest h, then oldest
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.h_cost.total_cmp(&self.h_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Node chain found by the search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Node ids from start to goal, inclusive
    pub chain: Vec<NodeId>,
    /// Accumulated weighted cost
    pub cost: f32,
    /// Nodes popped and expanded
    pub nodes_expanded: usize,
}

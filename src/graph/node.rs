//! Walkability graph nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Point3;

/// Node identifier, unique within one floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

fn default_walkable() -> bool {
    true
}

fn default_cost_multiplier() -> f32 {
    1.0
}

/// A single walkable graph vertex.
///
/// Edges are directed: `neighbors` lists the nodes reachable from this one.
/// Authoring tools usually add both directions but nothing guarantees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    /// Position in floor model space (meters).
    pub position: Point3,

    /// Non-walkable nodes are never entered by the search.
    #[serde(default = "default_walkable")]
    pub walkable: bool,

    /// Cost multiplier applied when entering this node.
    /// 1.0 is neutral, higher values discourage routing through it.
    #[serde(default = "default_cost_multiplier")]
    pub cost_multiplier: f32,

    /// Outgoing edges, in authoring order, without duplicates.
    #[serde(default)]
    pub neighbors: Vec<NodeId>,
}

impl Node {
    /// Create a walkable node with neutral cost and no edges.
    pub fn new(id: NodeId, position: Point3) -> Self {
        Self {
            id,
            position,
            walkable: true,
            cost_multiplier: 1.0,
            neighbors: Vec::new(),
        }
    }

    /// Builder: set outgoing neighbors (duplicates are dropped, order kept).
    pub fn with_neighbors(mut self, neighbors: impl IntoIterator<Item = NodeId>) -> Self {
        for n in neighbors {
            self.link(n);
        }
        self
    }

    /// Builder: set cost multiplier.
    pub fn with_cost(mut self, cost_multiplier: f32) -> Self {
        self.cost_multiplier = cost_multiplier;
        self
    }

    /// Builder: mark as blocked.
    pub fn blocked(mut self) -> Self {
        self.walkable = false;
        self
    }

    /// Whether this node has an outgoing edge to `other`
    #[inline]
    pub fn links_to(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Add an outgoing edge. Returns false if it already existed.
    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        if self.links_to(other) {
            return false;
        }
        self.neighbors.push(other);
        true
    }

    /// Remove an outgoing edge. Returns false if it did not exist.
    pub(crate) fn unlink(&mut self, other: NodeId) -> bool {
        let before = self.neighbors.len();
        self.neighbors.retain(|n| *n != other);
        self.neighbors.len() != before
    }
}

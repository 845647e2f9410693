//! Per-floor walkability graph.
//!
//! Nodes live in an id-keyed arena (`BTreeMap<NodeId, Node>`); edges are id
//! references inside each node. Iteration order is by id, which keeps
//! nearest-node tie breaking and search order deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::Point3;

use super::node::{Node, NodeId};
use super::{GraphError, GraphIssue};

/// A named location travellers can pick as a destination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Floor-local position
    pub position: Point3,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, category: impl Into<String>, position: Point3) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            position,
        }
    }
}

/// One floor of a building: its walkability graph and points of interest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FloorData", into = "FloorData")]
pub struct Floor {
    pub id: String,
    pub level: i32,
    nodes: BTreeMap<NodeId, Node>,
    pub pois: Vec<PointOfInterest>,
}

impl Floor {
    /// Create an empty floor
    pub fn new(id: impl Into<String>, level: i32) -> Self {
        Self {
            id: id.into(),
            level,
            nodes: BTreeMap::new(),
            pois: Vec::new(),
        }
    }

    /// Build a floor from authored nodes without checking edges.
    ///
    /// Duplicate ids are rejected. Self loops and dangling neighbors are
    /// accepted here and reported by [`Floor::validate`].
    pub fn from_nodes(
        id: impl Into<String>,
        level: i32,
        nodes: impl IntoIterator<Item = Node>,
    ) -> Result<Self, GraphError> {
        let mut floor = Self::new(id, level);
        for node in nodes {
            if floor.nodes.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
            floor.nodes.insert(node.id, node);
        }
        Ok(floor)
    }

    /// Builder: attach points of interest
    pub fn with_pois(mut self, pois: impl IntoIterator<Item = PointOfInterest>) -> Self {
        self.pois.extend(pois);
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Look up a node by id
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// All nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of nodes (walkable or not)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of walkable nodes
    pub fn walkable_count(&self) -> usize {
        self.nodes.values().filter(|n| n.walkable).count()
    }

    /// Nearest walkable node to `position` by Euclidean distance.
    ///
    /// Returns `None` only when the floor has no walkable node. Equal
    /// distances resolve to the lower id.
    pub fn nearest_walkable(&self, position: Point3) -> Option<&Node> {
        let mut best: Option<(&Node, f32)> = None;
        for node in self.nodes.values().filter(|n| n.walkable) {
            let d = node.position.distance_squared(&position);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((node, d)),
            }
        }
        best.map(|(node, _)| node)
    }

    /// Find a point of interest by name (case-insensitive)
    pub fn poi(&self, name: &str) -> Option<&PointOfInterest> {
        self.pois.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Report authoring errors: self loops and neighbors that do not exist.
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();
        for node in self.nodes.values() {
            for &neighbor in &node.neighbors {
                if neighbor == node.id {
                    issues.push(GraphIssue::SelfLoop {
                        floor: self.level,
                        node: node.id,
                    });
                } else if !self.nodes.contains_key(&neighbor) {
                    issues.push(GraphIssue::DanglingNeighbor {
                        floor: self.level,
                        node: node.id,
                        neighbor,
                    });
                }
            }
        }
        issues
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Insert a new node. Its neighbor list must not contain itself and
    /// every neighbor must already exist.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        check_cost(node.cost_multiplier)?;
        for &neighbor in &node.neighbors {
            if neighbor == node.id {
                return Err(GraphError::SelfLoop(node.id));
            }
            if !self.nodes.contains_key(&neighbor) {
                return Err(GraphError::UnknownNode(neighbor));
            }
        }
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Remove a node and scrub it from every other node's neighbor set.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let removed = self.nodes.remove(&id).ok_or(GraphError::UnknownNode(id))?;
        for node in self.nodes.values_mut() {
            node.unlink(id);
        }
        Ok(removed)
    }

    /// Add a directed edge `from → to`. Returns false if it already existed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<bool, GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::UnknownNode(to));
        }
        let node = self.nodes.get_mut(&from).ok_or(GraphError::UnknownNode(from))?;
        Ok(node.link(to))
    }

    /// Add edges in both directions
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        self.add_edge(a, b)?;
        self.add_edge(b, a)?;
        Ok(())
    }

    /// Remove a directed edge. Returns false if it did not exist.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<bool, GraphError> {
        let node = self.nodes.get_mut(&from).ok_or(GraphError::UnknownNode(from))?;
        Ok(node.unlink(to))
    }

    /// Set the walkable flag
    pub fn set_walkable(&mut self, id: NodeId, walkable: bool) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.walkable = walkable;
        Ok(())
    }

    /// Set the cost multiplier (must be finite and ≥ 0)
    pub fn set_cost_multiplier(&mut self, id: NodeId, cost: f32) -> Result<(), GraphError> {
        check_cost(cost)?;
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.cost_multiplier = cost;
        Ok(())
    }
}

fn check_cost(cost: f32) -> Result<(), GraphError> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidCost(cost))
    }
}

/// Serialized floor layout: nodes as a plain list.
#[derive(Serialize, Deserialize)]
struct FloorData {
    id: String,
    level: i32,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    pois: Vec<PointOfInterest>,
}

impl TryFrom<FloorData> for Floor {
    type Error = GraphError;

    fn try_from(data: FloorData) -> Result<Self, Self::Error> {
        Ok(Floor::from_nodes(data.id, data.level, data.nodes)?.with_pois(data.pois))
    }
}

impl From<Floor> for FloorData {
    fn from(floor: Floor) -> Self {
        FloorData {
            id: floor.id,
            level: floor.level,
            nodes: floor.nodes.into_values().collect(),
            pois: floor.pois,
        }
    }
}

//! Graph store: buildings, floors and their walkability graphs.
//!
//! ```text
//! BuildingCatalog ── active ──► Building ──► Floor (level) ──► Node (id)
//!                                   │             └──► PointOfInterest
//!                                   └──► MarkerRecord
//! ```
//!
//! Graphs are authored offline and treated as read-only while a navigation
//! session runs. Editing goes through the `Floor` methods, which keep the
//! invariants: no self loops, no dangling neighbor after a removal, finite
//! non-negative cost multipliers.

mod building;
mod catalog;
mod floor;
mod node;

pub use building::{Building, MarkerRecord};
pub use catalog::BuildingCatalog;
pub use floor::{Floor, PointOfInterest};
pub use node::{Node, NodeId};

use std::fmt;
use thiserror::Error;

/// Rejected graph edit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node {0} may not link to itself")]
    SelfLoop(NodeId),

    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("cost multiplier {0} must be finite and non-negative")]
    InvalidCost(f32),
}

/// Data error found in an authored graph
#[derive(Debug, Clone, PartialEq)]
pub enum GraphIssue {
    /// A node lists itself as a neighbor
    SelfLoop { floor: i32, node: NodeId },
    /// A neighbor id resolves to no node on the floor
    DanglingNeighbor {
        floor: i32,
        node: NodeId,
        neighbor: NodeId,
    },
    /// A marker references a floor the building does not have
    MarkerOnMissingFloor { marker: String, floor: i32 },
    /// A marker names a different owning building than the one holding it
    MarkerBuildingMismatch {
        marker: String,
        building: String,
        declared: String,
    },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphIssue::SelfLoop { floor, node } => {
                write!(f, "floor {}: node {} links to itself", floor, node)
            }
            GraphIssue::DanglingNeighbor {
                floor,
                node,
                neighbor,
            } => write!(
                f,
                "floor {}: node {} links to missing node {}",
                floor, node, neighbor
            ),
            GraphIssue::MarkerOnMissingFloor { marker, floor } => {
                write!(f, "marker '{}' is on missing floor {}", marker, floor)
            }
            GraphIssue::MarkerBuildingMismatch {
                marker,
                building,
                declared,
            } => write!(
                f,
                "marker '{}' is stored in '{}' but claims building '{}'",
                marker, building, declared
            ),
        }
    }
}

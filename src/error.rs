//! Error types for Disha-Nav

use thiserror::Error;

use crate::graph::{GraphError, NodeId};

/// Navigation error taxonomy.
///
/// Every variant is recoverable and reported to the orchestration layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("Floor {floor} not found in building '{building}'")]
    InvalidFloor { building: String, floor: i32 },

    #[error("No path from node {start} to node {goal}")]
    NoPath { start: NodeId, goal: NodeId },

    #[error("Marker '{0}' not found in any known building")]
    MarkerNotFound(String),

    #[error("Floor {floor} has no walkable nodes")]
    EmptyGraph { floor: i32 },

    #[error("Unknown building '{0}'")]
    UnknownBuilding(String),

    #[error("Operation not valid in state {0}")]
    InvalidState(&'static str),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Building data error: {0}")]
    Data(String),
}

impl NavError {
    /// Whether this is a "no route" condition (unreachable goal or a floor
    /// without walkable nodes).
    pub fn is_no_route(&self) -> bool {
        matches!(self, NavError::NoPath { .. } | NavError::EmptyGraph { .. })
    }
}

impl From<serde_yaml::Error> for NavError {
    fn from(e: serde_yaml::Error) -> Self {
        NavError::Data(e.to_string())
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        NavError::Data(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;

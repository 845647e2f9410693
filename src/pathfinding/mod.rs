//! Path finding on per-floor walkability graphs.
//!
//! [`PathFinder::find_path`] resolves the query positions to their nearest
//! walkable nodes, runs A* between them, splices the literal query positions
//! in place of the resolved end nodes and simplifies the result.
//!
//! ```rust,ignore
//! use disha_nav::pathfinding::PathFinder;
//!
//! let finder = PathFinder::with_defaults();
//! let path = finder.find_path(&building, 0, start, goal)?;
//! println!("{} points, {:.1}m", path.len(), path.length);
//! ```

pub mod astar;
mod path;
mod simplify;

pub use path::Path;
pub use simplify::simplify_path;

use log::debug;

use crate::config::PathfindingSection;
use crate::core::Point3;
use crate::error::{NavError, Result};
use crate::graph::Building;

/// Shortest-path search plus simplification.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    config: PathfindingSection,
}

impl PathFinder {
    /// Create a path finder
    pub fn new(config: PathfindingSection) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get the configuration
    pub fn config(&self) -> &PathfindingSection {
        &self.config
    }

    /// Find a simplified path from `start` to `end` on floor `level`.
    pub fn find_path(
        &self,
        building: &Building,
        level: i32,
        start: Point3,
        end: Point3,
    ) -> Result<Path> {
        let raw = self.find_raw_path(building, level, start, end)?;
        let simplified = simplify_path(&raw.points, self.config.simplify_angle_deg);
        debug!(
            "[PathFinder] floor {}: {} raw points -> {} simplified, {:.2}m",
            level,
            raw.len(),
            simplified.len(),
            raw.length
        );
        Ok(raw.with_points(simplified))
    }

    /// Find the unsimplified path: `[start, interior nodes…, end]`.
    ///
    /// The nodes `start` and `end` resolve to are represented by the query
    /// positions themselves. When both resolve to the same node the graph is
    /// not searched and the result is `[start, end]`.
    pub fn find_raw_path(
        &self,
        building: &Building,
        level: i32,
        start: Point3,
        end: Point3,
    ) -> Result<Path> {
        let floor = building.require_floor(level)?;

        let empty = || NavError::EmptyGraph { floor: level };
        let start_node = floor.nearest_walkable(start).ok_or_else(empty)?.id;
        let end_node = floor.nearest_walkable(end).ok_or_else(empty)?.id;

        if start_node == end_node {
            return Ok(Path::new(level, vec![start, end], 0.0, 0));
        }

        let result = astar::search(floor, start_node, end_node)?;

        let interior = result.chain[1..result.chain.len() - 1]
            .iter()
            .filter_map(|id| floor.node(*id).map(|n| n.position));
        let mut points = Vec::with_capacity(result.chain.len());
        points.push(start);
        points.extend(interior);
        points.push(end);

        Ok(Path::new(level, points, result.cost, result.nodes_expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Floor, Node, NodeId};

    fn line_building() -> Building {
        let mut floor = Floor::new("ground", 0);
        floor.add_node(Node::new(NodeId(1), Point3::new(0.0, 0.0, 0.0))).unwrap();
        floor.add_node(Node::new(NodeId(2), Point3::new(5.0, 0.0, 0.0))).unwrap();
        floor.add_node(Node::new(NodeId(3), Point3::new(10.0, 0.0, 0.0))).unwrap();
        floor.connect(NodeId(1), NodeId(2)).unwrap();
        floor.connect(NodeId(2), NodeId(3)).unwrap();
        Building::new("b", "B").with_floor(floor)
    }

    #[test]
    fn test_raw_path_uses_query_endpoints() {
        let building = line_building();
        let finder = PathFinder::with_defaults();
        let start = Point3::new(-0.5, 0.0, 0.3);
        let end = Point3::new(10.4, 0.0, -0.2);
        let raw = finder.find_raw_path(&building, 0, start, end).unwrap();
        assert_eq!(raw.points, vec![start, Point3::new(5.0, 0.0, 0.0), end]);
    }

    #[test]
    fn test_line_collapses() {
        let building = line_building();
        let finder = PathFinder::with_defaults();
        let start = Point3::new(0.0, 0.0, 0.0);
        let end = Point3::new(10.0, 0.0, 0.0);

        let raw = finder.find_raw_path(&building, 0, start, end).unwrap();
        assert_eq!(raw.len(), 3);

        let path = finder.find_path(&building, 0, start, end).unwrap();
        assert_eq!(path.points, vec![start, end]);
        assert!((path.length - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_trivial_path_without_edges() {
        let floor = Floor::from_nodes("solo", 2, [Node::new(NodeId(1), Point3::ZERO)]).unwrap();
        let building = Building::new("b", "B").with_floor(floor);
        let start = Point3::new(0.2, 0.0, 0.0);
        let end = Point3::new(-0.3, 0.0, 0.1);
        let path = PathFinder::with_defaults()
            .find_path(&building, 2, start, end)
            .unwrap();
        assert_eq!(path.points, vec![start, end]);
        assert_eq!(path.nodes_expanded, 0);
    }

    #[test]
    fn test_invalid_floor() {
        let building = line_building();
        let err = PathFinder::with_defaults()
            .find_path(&building, 7, Point3::ZERO, Point3::ZERO)
            .unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidFloor {
                building: "b".into(),
                floor: 7
            }
        );
    }

    #[test]
    fn test_empty_floor() {
        let building = Building::new("b", "B").with_floor(Floor::new("void", 1));
        let err = PathFinder::with_defaults()
            .find_path(&building, 1, Point3::ZERO, Point3::ZERO)
            .unwrap_err();
        assert_eq!(err, NavError::EmptyGraph { floor: 1 });
        assert!(err.is_no_route());
    }

    #[test]
    fn test_unreachable() {
        let mut building = line_building();
        let floor = building.floor_mut(0).unwrap();
        floor.remove_edge(NodeId(2), NodeId(3)).unwrap();
        let err = PathFinder::with_defaults()
            .find_path(&building, 0, Point3::ZERO, Point3::new(10.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, NavError::NoPath { .. }));
    }
}

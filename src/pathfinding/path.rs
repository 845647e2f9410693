//! Planned path type.

use crate::core::{Point3, polyline_length};

/// A planned route on one floor.
///
/// The first and last points are the literal query positions, not the
/// positions of the graph nodes they resolved to. Paths are recomputed
/// wholesale on every replan and never patched.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    /// Floor level the path runs on
    pub floor: i32,
    /// Points from start to destination
    pub points: Vec<Point3>,
    /// Polyline length in meters
    pub length: f32,
    /// Weighted search cost (distance × entered-node multipliers)
    pub cost: f32,
    /// Number of nodes expanded by the search (0 for a trivial path)
    pub nodes_expanded: usize,
}

impl Path {
    /// Create a path, computing its length.
    pub fn new(floor: i32, points: Vec<Point3>, cost: f32, nodes_expanded: usize) -> Self {
        let length = polyline_length(&points);
        Self {
            floor,
            points,
            length,
            cost,
            nodes_expanded,
        }
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point (query start)
    #[inline]
    pub fn start(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    /// Last point (query destination)
    #[inline]
    pub fn end(&self) -> Option<Point3> {
        self.points.last().copied()
    }

    /// Replace the points (after simplification), recomputing length.
    pub(crate) fn with_points(mut self, points: Vec<Point3>) -> Self {
        self.length = polyline_length(&points);
        self.points = points;
        self
    }
}

//! Path → render geometry pipeline.

use log::trace;

use crate::config::GeometrySection;
use crate::core::Point3;
use crate::pathfinding::Path;

use super::curve::{Indicator, build_curve, place_indicators, raise_points, turn_waypoints};
use super::renderer::{PathRenderer, RenderHandle};

/// Render geometry derived from one path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathGeometry {
    /// Densely sampled smooth curve
    pub curve: Vec<Point3>,
    /// Direction indicators spread by arc length
    pub indicators: Vec<Indicator>,
    /// Sharp turns plus the destination
    pub waypoints: Vec<Point3>,
}

impl PathGeometry {
    /// Compute geometry for a polyline without touching a renderer.
    pub fn from_points(points: &[Point3], config: &GeometrySection) -> Self {
        if points.len() < 2 {
            return Self::default();
        }

        let raised = raise_points(points, config.vertical_offset);
        let curve = build_curve(&raised, config.samples_per_segment, config.control_point_ratio);
        let indicators = place_indicators(&curve, config.indicator_spacing);
        let waypoints = turn_waypoints(&raised, config.waypoint_turn_deg);

        Self {
            curve,
            indicators,
            waypoints,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.curve.is_empty() && self.indicators.is_empty() && self.waypoints.is_empty()
    }
}

/// Builds geometry for the current path and keeps the renderer in sync.
///
/// At most one path is shown at a time: showing a new path first releases
/// every element of the previous one.
pub struct GeometryPipeline<R: PathRenderer> {
    config: GeometrySection,
    renderer: R,
    geometry: PathGeometry,
    handles: Vec<RenderHandle>,
}

impl<R: PathRenderer> GeometryPipeline<R> {
    pub fn new(config: GeometrySection, renderer: R) -> Self {
        Self {
            config,
            renderer,
            geometry: PathGeometry::default(),
            handles: Vec::new(),
        }
    }

    /// Replace the shown geometry with geometry for `path`.
    pub fn show(&mut self, path: &Path) -> &PathGeometry {
        self.clear();

        let geometry = PathGeometry::from_points(&path.points, &self.config);
        if !geometry.curve.is_empty() {
            self.handles.push(self.renderer.draw_curve(&geometry.curve));
        }
        for ind in &geometry.indicators {
            self.handles
                .push(self.renderer.place_indicator(ind.position, ind.direction));
        }
        for wp in &geometry.waypoints {
            self.handles.push(self.renderer.place_waypoint(*wp));
        }

        trace!(
            "[Geometry] {} curve samples, {} indicators, {} waypoints",
            geometry.curve.len(),
            geometry.indicators.len(),
            geometry.waypoints.len()
        );

        self.geometry = geometry;
        &self.geometry
    }

    /// Release every rendered element and forget the geometry.
    pub fn clear(&mut self) {
        for handle in self.handles.drain(..) {
            self.renderer.release(handle);
        }
        self.geometry = PathGeometry::default();
    }

    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    pub fn indicator_count(&self) -> usize {
        self.geometry.indicators.len()
    }

    pub fn waypoint_count(&self) -> usize {
        self.geometry.waypoints.len()
    }

    pub fn curve(&self) -> &[Point3] {
        &self.geometry.curve
    }

    pub fn config(&self) -> &GeometrySection {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::NullRenderer;
    use approx::assert_relative_eq;

    fn l_path() -> Path {
        Path::new(
            0,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 4.0),
            ],
            8.0,
            3,
        )
    }

    #[test]
    fn test_points_are_raised() {
        let geometry = PathGeometry::from_points(&l_path().points, &GeometrySection::default());
        assert!(geometry.curve.iter().all(|p| (p.y - 0.1).abs() < 1e-6));
        assert_eq!(geometry.waypoints.last(), Some(&Point3::new(4.0, 0.1, 4.0)));
    }

    #[test]
    fn test_show_publishes_everything() {
        let mut pipeline = GeometryPipeline::new(GeometrySection::default(), NullRenderer::new());
        let geometry = pipeline.show(&l_path()).clone();

        assert_eq!(geometry.curve.len(), 21);
        // 90° corner plus destination
        assert_eq!(geometry.waypoints.len(), 2);
        assert!(!geometry.indicators.is_empty());
        assert_eq!(
            pipeline.renderer().live_count(),
            1 + geometry.indicators.len() + geometry.waypoints.len()
        );
    }

    #[test]
    fn test_clear_releases_all_handles() {
        let mut pipeline = GeometryPipeline::new(GeometrySection::default(), NullRenderer::new());
        pipeline.show(&l_path());
        pipeline.clear();

        assert_eq!(pipeline.renderer().live_count(), 0);
        assert_eq!(pipeline.indicator_count(), 0);
        assert_eq!(pipeline.waypoint_count(), 0);
        assert!(pipeline.curve().is_empty());
    }

    #[test]
    fn test_show_replaces_previous() {
        let mut pipeline = GeometryPipeline::new(GeometrySection::default(), NullRenderer::new());
        pipeline.show(&l_path());
        let straight = Path::new(
            0,
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)],
            3.0,
            2,
        );
        pipeline.show(&straight);

        assert_eq!(pipeline.curve().len(), 2);
        assert_eq!(pipeline.indicator_count(), 3);
        assert_eq!(pipeline.waypoint_count(), 1);
        assert_eq!(pipeline.renderer().live_count(), 1 + 3 + 1);
        assert_relative_eq!(pipeline.geometry().indicators[1].position.x, 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_degenerate_path_shows_nothing() {
        let mut pipeline = GeometryPipeline::new(GeometrySection::default(), NullRenderer::new());
        let single = Path::new(0, vec![Point3::ZERO], 0.0, 0);
        assert!(pipeline.show(&single).is_empty());
        assert_eq!(pipeline.renderer().live_count(), 0);
    }
}

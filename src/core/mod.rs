//! Core geometric types.
//!
//! Coordinates are in meters with Y up; the walkable ground plane is X/Z.

mod point;
mod rotation;

pub use point::Point3;
pub use rotation::Rotation;

/// Total length of a polyline
pub fn polyline_length(points: &[Point3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Turn angle at `curr` in degrees: the angle between the incoming
/// direction `prev → curr` and the outgoing direction `curr → next`.
///
/// A straight run is 0°, a U-turn is 180°. Zero-length segments count as 0°.
pub fn turn_angle_deg(prev: Point3, curr: Point3, next: Point3) -> f32 {
    (curr - prev).angle_deg(&(next - curr))
}

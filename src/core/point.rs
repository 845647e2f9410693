//! 3-D point and vector type shared by the graph, planner and geometry code.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Point or vector in building model space (meters, f32).
///
/// Y is up. The ground plane is X/Z, so horizontal ("ground") distances
/// ignore the Y component.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters (up)
    pub y: f32,
    /// Z coordinate in meters
    pub z: f32,
}

impl Point3 {
    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Origin
    pub const ZERO: Point3 = Point3::new(0.0, 0.0, 0.0);

    /// Unit vector pointing up (+Y)
    pub const UP: Point3 = Point3::new(0.0, 1.0, 0.0);

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point3) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Distance on the ground plane (X/Z), ignoring height
    #[inline]
    pub fn ground_distance(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Length (magnitude) as a vector from the origin
    #[inline]
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalize to unit length. Zero vectors are returned unchanged.
    #[inline]
    pub fn normalize(&self) -> Point3 {
        let len = self.length();
        if len > 0.0 { *self * (1.0 / len) } else { *self }
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Point3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    #[inline]
    pub fn cross(&self, other: &Point3) -> Point3 {
        Point3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Linear interpolation towards `other` (t = 0 → self, t = 1 → other)
    #[inline]
    pub fn lerp(&self, other: &Point3, t: f32) -> Point3 {
        *self + (*other - *self) * t
    }

    /// Copy of this point shifted along +Y
    #[inline]
    pub fn raised(&self, offset: f32) -> Point3 {
        Point3::new(self.x, self.y + offset, self.z)
    }

    /// Angle between two vectors in degrees, in [0, 180].
    ///
    /// Returns 0 when either vector has zero length.
    pub fn angle_deg(&self, other: &Point3) -> f32 {
        let denom = self.length() * other.length();
        if denom <= f32::EPSILON {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos().to_degrees()
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Point3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_ground_distance_ignores_height() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 10.0, 4.0);
        assert_relative_eq!(a.ground_distance(&b), 5.0);
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(Point3::ZERO.normalize(), Point3::ZERO);
        let n = Point3::new(0.0, 0.0, 2.0).normalize();
        assert_relative_eq!(n.length(), 1.0);
    }

    #[test]
    fn test_angle_deg() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let z = Point3::new(0.0, 0.0, 1.0);
        assert_relative_eq!(x.angle_deg(&z), 90.0, epsilon = 1e-4);
        assert_relative_eq!(x.angle_deg(&x), 0.0, epsilon = 1e-3);
        assert_relative_eq!(x.angle_deg(&-x), 180.0, epsilon = 1e-3);
        assert_eq!(x.angle_deg(&Point3::ZERO), 0.0);
    }

    #[test]
    fn test_cross() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_lerp_and_raise() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 4.0);
        assert_eq!(a.lerp(&b, 0.5), Point3::new(1.0, 0.0, 2.0));
        assert_eq!(a.raised(0.25), Point3::new(0.0, 0.25, 0.0));
    }
}

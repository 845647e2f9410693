//! Unit quaternion rotation.

use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::point::Point3;

/// Rotation stored as a unit quaternion (x, y, z, w).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotation {
    /// No rotation
    pub const IDENTITY: Rotation = Rotation {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create from raw quaternion components, normalizing the result.
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Rotation { x, y, z, w }.normalized()
    }

    /// Rotation of `angle` radians around `axis` (right-handed).
    pub fn from_axis_angle(axis: Point3, angle: f32) -> Self {
        let axis = axis.normalize();
        let (sin, cos) = (angle * 0.5).sin_cos();
        Rotation {
            x: axis.x * sin,
            y: axis.y * sin,
            z: axis.z * sin,
            w: cos,
        }
    }

    /// Heading rotation around the vertical axis, in degrees
    pub fn from_yaw_deg(degrees: f32) -> Self {
        Self::from_axis_angle(Point3::UP, degrees.to_radians())
    }

    /// Inverse rotation (conjugate of a unit quaternion)
    #[inline]
    pub fn inverse(&self) -> Self {
        Rotation {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Rescale to unit length; degenerate input becomes identity.
    pub fn normalized(&self) -> Self {
        let norm = (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt();
        if norm <= f32::EPSILON {
            return Self::IDENTITY;
        }
        Rotation {
            x: self.x / norm,
            y: self.y / norm,
            z: self.z / norm,
            w: self.w / norm,
        }
    }

    /// Rotate a vector
    pub fn rotate(&self, v: Point3) -> Point3 {
        // v' = v + 2w(q × v) + 2 q × (q × v)
        let q = Point3::new(self.x, self.y, self.z);
        let t = q.cross(&v) * 2.0;
        v + t * self.w + q.cross(&t)
    }
}

impl Mul for Rotation {
    type Output = Rotation;

    /// Hamilton product: `a * b` applies `b` first, then `a`.
    fn mul(self, b: Rotation) -> Rotation {
        let a = self;
        Rotation {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_point_eq(a: Point3, b: Point3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_identity() {
        let v = Point3::new(1.0, 2.0, 3.0);
        assert_point_eq(Rotation::IDENTITY.rotate(v), v);
    }

    #[test]
    fn test_yaw_90() {
        // Right-handed rotation about +Y takes +X to -Z
        let r = Rotation::from_yaw_deg(90.0);
        assert_point_eq(r.rotate(Point3::new(1.0, 0.0, 0.0)), Point3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let r = Rotation::from_axis_angle(Point3::new(1.0, 1.0, 0.0), 0.7);
        let v = Point3::new(0.3, -2.0, 5.0);
        assert_point_eq(r.inverse().rotate(r.rotate(v)), v);
    }

    #[test]
    fn test_composition() {
        let a = Rotation::from_yaw_deg(30.0);
        let b = Rotation::from_yaw_deg(60.0);
        let v = Point3::new(1.0, 0.0, 0.0);
        assert_point_eq((a * b).rotate(v), Rotation::from_yaw_deg(90.0).rotate(v));
    }

    #[test]
    fn test_degenerate_normalizes_to_identity() {
        assert_eq!(Rotation::new(0.0, 0.0, 0.0, 0.0), Rotation::IDENTITY);
    }
}

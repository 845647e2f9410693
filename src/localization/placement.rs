//! Model-to-world placement transform.

use crate::core::{Point3, Rotation};

/// Rigid transform placing the building model in the real-world frame.
///
/// `model_to_world(p) = rotation · p + translation`. Replaced wholesale on
/// every resolved marker, never composed with a previous placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementTransform {
    pub translation: Point3,
    pub rotation: Rotation,
}

impl Default for PlacementTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PlacementTransform {
    /// Model space coincides with the world frame
    pub const IDENTITY: PlacementTransform = PlacementTransform {
        translation: Point3::ZERO,
        rotation: Rotation::IDENTITY,
    };

    pub fn new(translation: Point3, rotation: Rotation) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Map a model-space point into the world frame
    #[inline]
    pub fn model_to_world(&self, p: Point3) -> Point3 {
        self.rotation.rotate(p) + self.translation
    }

    /// Map a world-frame point into model space
    #[inline]
    pub fn world_to_model(&self, w: Point3) -> Point3 {
        self.rotation.inverse().rotate(w - self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(PlacementTransform::IDENTITY.model_to_world(p), p);
        assert_eq!(PlacementTransform::IDENTITY.world_to_model(p), p);
    }

    #[test]
    fn test_inverse_mapping() {
        let t = PlacementTransform::new(Point3::new(4.0, 0.5, -2.0), Rotation::from_yaw_deg(37.0));
        let p = Point3::new(1.5, 0.0, 8.0);
        let back = t.world_to_model(t.model_to_world(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-4);
    }

    #[test]
    fn test_rotation_applies_before_translation() {
        let t = PlacementTransform::new(Point3::new(10.0, 0.0, 0.0), Rotation::from_yaw_deg(90.0));
        let w = t.model_to_world(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(w.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(w.z, -1.0, epsilon = 1e-5);
    }
}

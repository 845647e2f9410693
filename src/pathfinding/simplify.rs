//! Angle-threshold path simplification.

use crate::core::{Point3, turn_angle_deg};

/// Drop interior points whose turn angle is at most `max_turn_deg`.
///
/// The turn angle of point `i` is measured between `path[i-1] → path[i]` and
/// `path[i] → path[i+1]` of the input path, so each point is judged on its
/// own local geometry. The first and last points are always kept.
pub fn simplify_path(path: &[Point3], max_turn_deg: f32) -> Vec<Point3> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut result = Vec::with_capacity(path.len());
    result.push(path[0]);

    for w in path.windows(3) {
        if turn_angle_deg(w[0], w[1], w[2]) > max_turn_deg {
            result.push(w[1]);
        }
    }

    result.push(path[path.len() - 1]);
    result
}

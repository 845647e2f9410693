//! Bezier curve construction and arc-length sampling.

use crate::config::GeometrySection;
use crate::core::{Point3, polyline_length, turn_angle_deg};

/// Upper bound on indicators placed along one curve
pub const MAX_INDICATORS: usize = 10_000;

/// A direction indicator placed along the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicator {
    pub position: Point3,
    /// Unit direction of the curve segment the indicator sits on
    pub direction: Point3,
}

/// Lift every point by `offset` along +Y.
pub fn raise_points(points: &[Point3], offset: f32) -> Vec<Point3> {
    points.iter().map(|p| p.raised(offset)).collect()
}

/// Tangent at point `i`: previous → next, or the adjoining segment at the ends.
fn tangent(points: &[Point3], i: usize) -> Point3 {
    let last = points.len() - 1;
    let (from, to) = if i == 0 {
        (points[0], points[1])
    } else if i == last {
        (points[last - 1], points[last])
    } else {
        (points[i - 1], points[i + 1])
    };
    (to - from).normalize()
}

#[inline]
fn cubic_bezier(p0: Point3, c1: Point3, c2: Point3, p1: Point3, t: f32) -> Point3 {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p1 * (t * t * t)
}

/// Smooth curve through `points`.
///
/// Each consecutive pair becomes a cubic Bezier segment sampled at
/// `samples_per_segment` parametric steps, clamped to
/// `[1, GeometrySection::MAX_SAMPLES_PER_SEGMENT]`. Control points sit along
/// the point tangents at `control_ratio` of the segment length. Joint points
/// are emitted once, so the result holds `segments * samples + 1` points.
/// Two-point input is returned as the straight segment itself.
pub fn build_curve(
    points: &[Point3],
    samples_per_segment: usize,
    control_ratio: f32,
) -> Vec<Point3> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let samples = samples_per_segment.clamp(1, GeometrySection::MAX_SAMPLES_PER_SEGMENT);
    let mut curve = Vec::with_capacity((points.len() - 1) * samples + 1);
    curve.push(points[0]);

    for i in 0..points.len() - 1 {
        let (p0, p1) = (points[i], points[i + 1]);
        let reach = p0.distance(&p1) * control_ratio;
        let c1 = p0 + tangent(points, i) * reach;
        let c2 = p1 - tangent(points, i + 1) * reach;

        for s in 1..=samples {
            let t = s as f32 / samples as f32;
            curve.push(cubic_bezier(p0, c1, c2, p1, t));
        }
    }

    curve
}

/// Indicators evenly spread by arc length.
///
/// `count = max(1, floor(length / spacing))`, capped at [`MAX_INDICATORS`],
/// and indicator `k` sits at arc length `(k + 0.5) * length / count`.
///
/// A non-empty curve of zero length still gets a single indicator at its
/// first point, with a zero direction. An empty curve gets none.
pub fn place_indicators(curve: &[Point3], spacing: f32) -> Vec<Indicator> {
    let Some(&first) = curve.first() else {
        return Vec::new();
    };
    let length = polyline_length(curve);
    if curve.len() < 2 || !(length > 0.0) || !(spacing > 0.0) {
        return vec![Indicator {
            position: first,
            direction: Point3::ZERO,
        }];
    }

    let count = ((length / spacing).floor() as usize).clamp(1, MAX_INDICATORS);
    let step = length / count as f32;

    let mut indicators = Vec::with_capacity(count);
    let mut seg = 0;
    let mut seg_start = 0.0;
    let mut seg_len = curve[0].distance(&curve[1]);

    for k in 0..count {
        let target = (k as f32 + 0.5) * step;
        while seg_start + seg_len < target && seg + 2 < curve.len() {
            seg_start += seg_len;
            seg += 1;
            seg_len = curve[seg].distance(&curve[seg + 1]);
        }

        let (a, b) = (curve[seg], curve[seg + 1]);
        let t = if seg_len > 0.0 {
            ((target - seg_start) / seg_len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        indicators.push(Indicator {
            position: a.lerp(&b, t),
            direction: (b - a).normalize(),
        });
    }

    indicators
}

/// Interior points turning more than `min_turn_deg`, plus the final point.
pub fn turn_waypoints(points: &[Point3], min_turn_deg: f32) -> Vec<Point3> {
    let mut waypoints: Vec<Point3> = points
        .windows(3)
        .filter(|w| turn_angle_deg(w[0], w[1], w[2]) > min_turn_deg)
        .map(|w| w[1])
        .collect();
    if let Some(last) = points.last() {
        waypoints.push(*last);
    }
    waypoints
}

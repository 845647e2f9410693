//! Path geometry configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Render geometry settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometrySection {
    /// Height added to every path point so the curve floats above the floor (meters)
    #[serde(default = "defaults::vertical_offset")]
    pub vertical_offset: f32,

    /// Parametric samples per Bezier segment
    #[serde(default = "defaults::samples_per_segment")]
    pub samples_per_segment: usize,

    /// Control point distance as a fraction of the segment length
    #[serde(default = "defaults::control_point_ratio")]
    pub control_point_ratio: f32,

    /// Arc length between direction indicators (meters)
    #[serde(default = "defaults::indicator_spacing")]
    pub indicator_spacing: f32,

    /// Turns sharper than this get a waypoint marker (degrees)
    #[serde(default = "defaults::waypoint_turn_deg")]
    pub waypoint_turn_deg: f32,
}

impl GeometrySection {
    /// Smallest accepted indicator spacing (meters)
    pub const MIN_INDICATOR_SPACING: f32 = 0.01;

    /// Largest accepted Bezier sample count per segment
    pub const MAX_SAMPLES_PER_SEGMENT: usize = 1000;
}

impl Default for GeometrySection {
    fn default() -> Self {
        Self {
            vertical_offset: defaults::vertical_offset(),
            samples_per_segment: defaults::samples_per_segment(),
            control_point_ratio: defaults::control_point_ratio(),
            indicator_spacing: defaults::indicator_spacing(),
            waypoint_turn_deg: defaults::waypoint_turn_deg(),
        }
    }
}

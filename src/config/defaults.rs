//! Default value functions for serde deserialization.

pub fn simplify_angle_deg() -> f32 {
    10.0
}

pub fn vertical_offset() -> f32 {
    0.1
}

pub fn samples_per_segment() -> usize {
    10
}

pub fn control_point_ratio() -> f32 {
    0.3
}

pub fn indicator_spacing() -> f32 {
    1.0
}

pub fn waypoint_turn_deg() -> f32 {
    30.0
}

pub fn replan_interval_secs() -> f32 {
    1.0
}

pub fn arrival_radius() -> f32 {
    1.0
}

pub fn walking_speed() -> f32 {
    1.2
}

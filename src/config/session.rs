//! Navigation session configuration section.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;

/// Session cadence and arrival settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSection {
    /// Minimum time between periodic replans (seconds)
    #[serde(default = "defaults::replan_interval_secs")]
    pub replan_interval_secs: f32,

    /// Ground distance to the final path point that counts as arrived (meters)
    #[serde(default = "defaults::arrival_radius")]
    pub arrival_radius: f32,

    /// Walking speed used for time estimates (m/s)
    #[serde(default = "defaults::walking_speed")]
    pub walking_speed: f32,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            replan_interval_secs: defaults::replan_interval_secs(),
            arrival_radius: defaults::arrival_radius(),
            walking_speed: defaults::walking_speed(),
        }
    }
}

impl SessionSection {
    /// Largest accepted replan interval (seconds)
    pub const MAX_REPLAN_INTERVAL_SECS: f32 = 3600.0;

    /// Replan interval as a `Duration`, clamped to [0, MAX_REPLAN_INTERVAL_SECS]
    pub fn replan_interval(&self) -> Duration {
        let secs = self
            .replan_interval_secs
            .clamp(0.0, Self::MAX_REPLAN_INTERVAL_SECS);
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO)
    }
}

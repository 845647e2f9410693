//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Path finder settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathfindingSection {
    /// Interior points turning by at most this angle are dropped (degrees)
    #[serde(default = "defaults::simplify_angle_deg")]
    pub simplify_angle_deg: f32,
}

impl Default for PathfindingSection {
    fn default() -> Self {
        Self {
            simplify_angle_deg: defaults::simplify_angle_deg(),
        }
    }
}

//! Unified configuration loading for Disha-Nav.
//!
//! Loads all configuration from a single YAML file. Every section and field
//! has a default, so partial files are valid.
//!
//! ```yaml
//! pathfinding:
//!   simplify_angle_deg: 10.0
//! geometry:
//!   vertical_offset: 0.1
//!   samples_per_segment: 10
//!   control_point_ratio: 0.3
//!   indicator_spacing: 1.0
//!   waypoint_turn_deg: 30.0
//! session:
//!   replan_interval_secs: 1.0
//!   arrival_radius: 1.0
//!   walking_speed: 1.2
//! ```

mod defaults;
mod disha;
mod error;
mod geometry;
mod pathfinding;
mod session;

pub use disha::{DEFAULT_CONFIG_PATH, DishaConfig};
pub use error::ConfigLoadError;
pub use geometry::GeometrySection;
pub use pathfinding::PathfindingSection;
pub use session::SessionSection;

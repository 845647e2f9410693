//! Main DishaConfig and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::geometry::GeometrySection;
use super::pathfinding::PathfindingSection;
use super::session::SessionSection;

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/disha.yaml";

/// Full Disha-Nav configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct DishaConfig {
    /// Path finder settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,

    /// Render geometry settings
    #[serde(default)]
    pub geometry: GeometrySection,

    /// Session settings
    #[serde(default)]
    pub session: SessionSection,
}

impl DishaConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, falling back to defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DishaConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        fn invalid(field: &'static str, reason: &str) -> ConfigLoadError {
            ConfigLoadError::Invalid {
                field,
                reason: reason.to_string(),
            }
        }

        let angle = self.pathfinding.simplify_angle_deg;
        if !(0.0..=180.0).contains(&angle) {
            return Err(invalid("pathfinding.simplify_angle_deg", "must be in [0, 180]"));
        }

        let g = &self.geometry;
        if !g.vertical_offset.is_finite() {
            return Err(invalid("geometry.vertical_offset", "must be finite"));
        }
        if !(1..=GeometrySection::MAX_SAMPLES_PER_SEGMENT).contains(&g.samples_per_segment) {
            return Err(invalid("geometry.samples_per_segment", "must be in [1, 1000]"));
        }
        if !(g.control_point_ratio >= 0.0 && g.control_point_ratio <= 1.0) {
            return Err(invalid("geometry.control_point_ratio", "must be in [0, 1]"));
        }
        if !(g.indicator_spacing >= GeometrySection::MIN_INDICATOR_SPACING
            && g.indicator_spacing.is_finite())
        {
            return Err(invalid("geometry.indicator_spacing", "must be at least 0.01"));
        }
        if !(0.0..=180.0).contains(&g.waypoint_turn_deg) {
            return Err(invalid("geometry.waypoint_turn_deg", "must be in [0, 180]"));
        }

        let s = &self.session;
        if !(0.0..=SessionSection::MAX_REPLAN_INTERVAL_SECS).contains(&s.replan_interval_secs) {
            return Err(invalid("session.replan_interval_secs", "must be in [0, 3600]"));
        }
        if !(s.arrival_radius >= 0.0 && s.arrival_radius.is_finite()) {
            return Err(invalid("session.arrival_radius", "must be non-negative"));
        }
        if !(s.walking_speed > 0.0 && s.walking_speed.is_finite()) {
            return Err(invalid("session.walking_speed", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DishaConfig::default();
        assert_eq!(config.pathfinding.simplify_angle_deg, 10.0);
        assert_eq!(config.geometry.control_point_ratio, 0.3);
        assert_eq!(config.geometry.waypoint_turn_deg, 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DishaConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = DishaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = DishaConfig::from_yaml("session:\n  arrival_radius: 2.5\n").unwrap();
        assert_eq!(config.session.arrival_radius, 2.5);
        assert_eq!(config.session.replan_interval_secs, 1.0);
        assert_eq!(config.geometry, GeometrySection::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = DishaConfig::from_yaml("geometry:\n  indicator_spacing: 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid {
                field: "geometry.indicator_spacing",
                ..
            }
        ));
        assert!(DishaConfig::from_yaml("geometry:\n  samples_per_segment: 0\n").is_err());
        assert!(DishaConfig::from_yaml("session:\n  walking_speed: -1\n").is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err =
            DishaConfig::from_yaml("session:\n  replan_interval_secs: 1.0e20\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid {
                field: "session.replan_interval_secs",
                ..
            }
        ));
        assert!(DishaConfig::from_yaml("session:\n  replan_interval_secs: 3600.0\n").is_ok());

        let err =
            DishaConfig::from_yaml("geometry:\n  indicator_spacing: 1.0e-12\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid {
                field: "geometry.indicator_spacing",
                ..
            }
        ));
        assert!(DishaConfig::from_yaml("geometry:\n  samples_per_segment: 1001\n").is_err());
        assert!(DishaConfig::from_yaml("geometry:\n  samples_per_segment: 1000\n").is_ok());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            DishaConfig::from_yaml("session: [1, 2"),
            Err(ConfigLoadError::Parse(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disha.yaml");
        std::fs::write(&path, "pathfinding:\n  simplify_angle_deg: 5.0\n").unwrap();
        let config = DishaConfig::load(&path).unwrap();
        assert_eq!(config.pathfinding.simplify_angle_deg, 5.0);

        assert!(matches!(
            DishaConfig::load(&dir.path().join("missing.yaml")),
            Err(ConfigLoadError::Io(_))
        ));
    }
}

//! Buildings, their floors and registration markers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};

use crate::core::{Point3, Rotation};
use crate::error::{NavError, Result};

use super::floor::{Floor, PointOfInterest};
use super::GraphIssue;

/// A fixed real-world registration point with known world and model
/// coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Decoded identifier printed in the marker
    pub id: String,
    /// Owning building id
    pub building_id: String,
    /// Floor level the marker is mounted on
    pub floor: i32,
    /// Reference position in the real-world frame
    pub world_reference: Point3,
    /// Matching reference position in building model space
    pub model_reference: Point3,
    /// Authored model orientation used for placement
    #[serde(default)]
    pub model_orientation: Rotation,
}

/// A building: floors keyed by level plus its markers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BuildingData", into = "BuildingData")]
pub struct Building {
    pub id: String,
    pub name: String,
    floors: BTreeMap<i32, Floor>,
    pub markers: Vec<MarkerRecord>,
}

impl Building {
    /// Create an empty building
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            floors: BTreeMap::new(),
            markers: Vec::new(),
        }
    }

    /// Add or replace a floor (keyed by level)
    pub fn insert_floor(&mut self, floor: Floor) -> Option<Floor> {
        self.floors.insert(floor.level, floor)
    }

    /// Builder: add a floor
    pub fn with_floor(mut self, floor: Floor) -> Self {
        self.insert_floor(floor);
        self
    }

    /// Builder: add a marker
    pub fn with_marker(mut self, marker: MarkerRecord) -> Self {
        self.markers.push(marker);
        self
    }

    /// Floor by level
    #[inline]
    pub fn floor(&self, level: i32) -> Option<&Floor> {
        self.floors.get(&level)
    }

    /// Mutable floor by level (graph editing)
    pub fn floor_mut(&mut self, level: i32) -> Option<&mut Floor> {
        self.floors.get_mut(&level)
    }

    /// Floor by level, or [`NavError::InvalidFloor`]
    pub fn require_floor(&self, level: i32) -> Result<&Floor> {
        self.floor(level).ok_or_else(|| NavError::InvalidFloor {
            building: self.id.clone(),
            floor: level,
        })
    }

    /// Floors in ascending level order
    pub fn floors(&self) -> impl Iterator<Item = &Floor> {
        self.floors.values()
    }

    /// Marker by identifier
    pub fn marker(&self, id: &str) -> Option<&MarkerRecord> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Find a point of interest by name on any floor (case-insensitive).
    ///
    /// Returns the floor level with the match. Lower floors win.
    pub fn find_poi(&self, name: &str) -> Option<(i32, &PointOfInterest)> {
        self.floors
            .values()
            .find_map(|f| f.poi(name).map(|p| (f.level, p)))
    }

    /// All points of interest in a category, with their floor levels
    pub fn pois_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = (i32, &'a PointOfInterest)> + 'a {
        self.floors.values().flat_map(move |f| {
            f.pois
                .iter()
                .filter(move |p| p.category.eq_ignore_ascii_case(category))
                .map(move |p| (f.level, p))
        })
    }

    /// Graph issues across every floor, plus markers that point at a missing
    /// floor or claim another building
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues: Vec<GraphIssue> =
            self.floors.values().flat_map(|f| f.validate()).collect();
        for marker in &self.markers {
            if marker.building_id != self.id {
                issues.push(GraphIssue::MarkerBuildingMismatch {
                    marker: marker.id.clone(),
                    building: self.id.clone(),
                    declared: marker.building_id.clone(),
                });
            }
            if !self.floors.contains_key(&marker.floor) {
                issues.push(GraphIssue::MarkerOnMissingFloor {
                    marker: marker.id.clone(),
                    floor: marker.floor,
                });
            }
        }
        issues
    }

    /// Parse a building from YAML and log any graph issues found.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let building: Building = serde_yaml::from_str(yaml)?;
        let issues = building.validate();
        for issue in &issues {
            warn!("[Building] '{}': {}", building.id, issue);
        }
        debug!(
            "[Building] loaded '{}' with {} floors, {} markers, {} issues",
            building.id,
            building.floors.len(),
            building.markers.len(),
            issues.len()
        );
        Ok(building)
    }

    /// Load a building from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NavError::Data(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&contents)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[derive(Serialize, Deserialize)]
struct BuildingData {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    floors: Vec<Floor>,
    #[serde(default)]
    markers: Vec<MarkerRecord>,
}

impl TryFrom<BuildingData> for Building {
    type Error = String;

    fn try_from(data: BuildingData) -> std::result::Result<Self, Self::Error> {
        let mut building = Building::new(data.id, data.name);
        for floor in data.floors {
            let level = floor.level;
            if building.insert_floor(floor).is_some() {
                return Err(format!("duplicate floor level {}", level));
            }
        }
        building.markers = data.markers;
        Ok(building)
    }
}

impl From<Building> for BuildingData {
    fn from(building: Building) -> Self {
        BuildingData {
            id: building.id,
            name: building.name,
            floors: building.floors.into_values().collect(),
            markers: building.markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, NodeId};

    fn sample() -> Building {
        let ground = Floor::from_nodes("g", 0, [Node::new(NodeId(1), Point3::ZERO)])
            .unwrap()
            .with_pois([PointOfInterest::new("Lobby", "info", Point3::ZERO)]);
        let upper = Floor::new("u", 3).with_pois([
            PointOfInterest::new("Cafe", "food", Point3::new(1.0, 0.0, 1.0)),
            PointOfInterest::new("Kiosk", "Food", Point3::new(2.0, 0.0, 1.0)),
        ]);
        Building::new("hq", "Headquarters")
            .with_floor(ground)
            .with_floor(upper)
            .with_marker(MarkerRecord {
                id: "M-1".into(),
                building_id: "hq".into(),
                floor: 0,
                world_reference: Point3::ZERO,
                model_reference: Point3::ZERO,
                model_orientation: Rotation::IDENTITY,
            })
    }

    #[test]
    fn test_floor_lookup_non_contiguous() {
        let b = sample();
        assert!(b.floor(0).is_some());
        assert!(b.floor(3).is_some());
        assert!(matches!(
            b.require_floor(1),
            Err(NavError::InvalidFloor { floor: 1, .. })
        ));
    }

    #[test]
    fn test_poi_search() {
        let b = sample();
        let (level, poi) = b.find_poi("CAFE").unwrap();
        assert_eq!(level, 3);
        assert_eq!(poi.name, "Cafe");
        assert_eq!(b.pois_in_category("food").count(), 2);
        assert!(b.find_poi("Gym").is_none());
    }

    #[test]
    fn test_marker_on_missing_floor_reported() {
        let mut b = sample();
        b.markers[0].floor = 9;
        assert_eq!(
            b.validate(),
            vec![GraphIssue::MarkerOnMissingFloor {
                marker: "M-1".into(),
                floor: 9
            }]
        );
    }

    #[test]
    fn test_marker_building_mismatch_reported() {
        let mut b = sample();
        b.markers[0].building_id = "annex".into();
        assert_eq!(
            b.validate(),
            vec![GraphIssue::MarkerBuildingMismatch {
                marker: "M-1".into(),
                building: "hq".into(),
                declared: "annex".into(),
            }]
        );
    }

    #[test]
    fn test_yaml_roundtrip() {
        let b = sample();
        let yaml = b.to_yaml().unwrap();
        let parsed = Building::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, b);
    }

    #[test]
    fn test_yaml_duplicate_floor_rejected() {
        let yaml = "id: b\nfloors:\n  - {id: a, level: 1}\n  - {id: b, level: 1}\n";
        assert!(matches!(Building::from_yaml(yaml), Err(NavError::Data(_))));
    }
}

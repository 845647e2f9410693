//! Application-owned collection of known buildings.

use std::path::Path;

use log::info;

use crate::error::{NavError, Result};

use super::building::{Building, MarkerRecord};

/// Known buildings with exactly one active building.
///
/// The catalog is owned by the application and passed explicitly to the
/// registrar and the session.
#[derive(Clone, Debug)]
pub struct BuildingCatalog {
    buildings: Vec<Building>,
    active: usize,
}

impl BuildingCatalog {
    /// Create a catalog whose first building is active.
    ///
    /// Returns `None` if `buildings` is empty.
    pub fn new(buildings: Vec<Building>) -> Option<Self> {
        if buildings.is_empty() {
            return None;
        }
        Some(Self {
            buildings,
            active: 0,
        })
    }

    /// Catalog with a single (active) building
    pub fn single(building: Building) -> Self {
        Self {
            buildings: vec![building],
            active: 0,
        }
    }

    /// Load every `*.yaml` / `*.yml` file in a directory, sorted by file name.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("yaml") | Some("yml")
                )
            })
            .collect();
        paths.sort();

        let buildings = paths
            .iter()
            .map(|p| Building::load(p))
            .collect::<Result<Vec<_>>>()?;
        info!(
            "[Catalog] loaded {} buildings from {}",
            buildings.len(),
            dir.display()
        );
        Self::new(buildings)
            .ok_or_else(|| NavError::Data(format!("no building files in {}", dir.display())))
    }

    /// The active building
    #[inline]
    pub fn active(&self) -> &Building {
        &self.buildings[self.active]
    }

    /// Make another building active
    pub fn set_active(&mut self, building_id: &str) -> Result<()> {
        let idx = self
            .buildings
            .iter()
            .position(|b| b.id == building_id)
            .ok_or_else(|| NavError::UnknownBuilding(building_id.to_string()))?;
        if idx != self.active {
            info!("[Catalog] active building: {}", building_id);
            self.active = idx;
        }
        Ok(())
    }

    /// Building by id
    pub fn get(&self, building_id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == building_id)
    }

    /// All buildings, in load order
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Find a marker, searching the active building first.
    pub fn find_marker(&self, marker_id: &str) -> Option<&MarkerRecord> {
        self.active().marker(marker_id).or_else(|| {
            self.buildings
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != self.active)
                .find_map(|(_, b)| b.marker(marker_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point3, Rotation};
    use std::io::Write;

    fn marker(id: &str, building: &str) -> MarkerRecord {
        MarkerRecord {
            id: id.into(),
            building_id: building.into(),
            floor: 0,
            world_reference: Point3::ZERO,
            model_reference: Point3::ZERO,
            model_orientation: Rotation::IDENTITY,
        }
    }

    #[test]
    fn test_empty_catalog() {
        assert!(BuildingCatalog::new(Vec::new()).is_none());
    }

    #[test]
    fn test_marker_lookup_prefers_active() {
        let a = Building::new("a", "A").with_marker(marker("shared", "a"));
        let b = Building::new("b", "B")
            .with_marker(marker("shared", "b"))
            .with_marker(marker("only-b", "b"));
        let mut catalog = BuildingCatalog::new(vec![a, b]).unwrap();

        assert_eq!(catalog.find_marker("shared").unwrap().building_id, "a");
        assert_eq!(catalog.find_marker("only-b").unwrap().building_id, "b");

        catalog.set_active("b").unwrap();
        assert_eq!(catalog.find_marker("shared").unwrap().building_id, "b");
        assert!(catalog.find_marker("nope").is_none());
    }

    #[test]
    fn test_set_active_unknown() {
        let mut catalog = BuildingCatalog::single(Building::new("a", "A"));
        assert_eq!(
            catalog.set_active("zzz"),
            Err(NavError::UnknownBuilding("zzz".into()))
        );
        assert_eq!(catalog.active().id, "a");
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        for (file, id) in [("b.yaml", "second"), ("a.yaml", "first")] {
            let mut f = std::fs::File::create(dir.path().join(file)).unwrap();
            writeln!(f, "id: {}\nname: {}", id, id).unwrap();
        }
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = BuildingCatalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.buildings().len(), 2);
        assert_eq!(catalog.active().id, "first");
    }

    #[test]
    fn test_load_dir_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            BuildingCatalog::load_dir(dir.path()),
            Err(NavError::Data(_))
        ));
    }
}

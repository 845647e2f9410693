//! Marker resolution and placement computation.

use log::{debug, info};

use crate::core::{Point3, Rotation};
use crate::error::{NavError, Result};
use crate::graph::{BuildingCatalog, MarkerRecord};

use super::placement::PlacementTransform;

/// Result of registering against a scanned marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub transform: PlacementTransform,
    /// Building the marker belongs to (now the active building)
    pub building_id: String,
    /// Floor level the marker is mounted on
    pub floor: i32,
    pub marker_id: String,
}

/// Resolves decoded marker ids into placement transforms.
#[derive(Clone, Debug, Default)]
pub struct Registrar {
    registrations: u64,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful registrations so far
    pub fn registrations(&self) -> u64 {
        self.registrations
    }

    /// Look up a marker: the active building first, then every known building.
    pub fn resolve_marker<'a>(
        &self,
        catalog: &'a BuildingCatalog,
        marker_id: &str,
    ) -> Result<&'a MarkerRecord> {
        catalog.find_marker(marker_id).ok_or_else(|| {
            debug!("[Registrar] unknown marker '{}'", marker_id);
            NavError::MarkerNotFound(marker_id.to_string())
        })
    }

    /// Placement for a marker seen by a camera at `camera_position`.
    ///
    /// The rotation is the marker's authored model orientation; the camera
    /// orientation is not fused into it.
    pub fn compute_placement(
        &self,
        record: &MarkerRecord,
        camera_position: Point3,
        _camera_orientation: Rotation,
    ) -> PlacementTransform {
        let translation = camera_position + (record.world_reference - record.model_reference);
        PlacementTransform::new(translation, record.model_orientation)
    }

    /// Resolve, compute the placement and make the marker's building active.
    pub fn register(
        &mut self,
        catalog: &mut BuildingCatalog,
        marker_id: &str,
        camera_position: Point3,
        camera_orientation: Rotation,
    ) -> Result<Registration> {
        let record = self.resolve_marker(catalog, marker_id)?.clone();
        let transform = self.compute_placement(&record, camera_position, camera_orientation);

        catalog.set_active(&record.building_id)?;
        self.registrations += 1;

        info!(
            "[Registrar] marker '{}' -> building '{}' floor {}, translation ({:.2}, {:.2}, {:.2})",
            record.id,
            record.building_id,
            record.floor,
            transform.translation.x,
            transform.translation.y,
            transform.translation.z
        );

        Ok(Registration {
            transform,
            building_id: record.building_id,
            floor: record.floor,
            marker_id: record.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Building, Floor};

    fn marker(id: &str, building: &str, floor: i32) -> MarkerRecord {
        MarkerRecord {
            id: id.into(),
            building_id: building.into(),
            floor,
            world_reference: Point3::new(10.0, 0.0, 5.0),
            model_reference: Point3::new(2.0, 0.0, 1.0),
            model_orientation: Rotation::from_yaw_deg(90.0),
        }
    }

    fn catalog() -> BuildingCatalog {
        let a = Building::new("a", "Alpha")
            .with_floor(Floor::new("g", 0))
            .with_marker(marker("A-LOBBY", "a", 0));
        let b = Building::new("b", "Beta")
            .with_floor(Floor::new("g", 0))
            .with_floor(Floor::new("f1", 1))
            .with_marker(marker("B-STAIRS", "b", 1));
        BuildingCatalog::new(vec![a, b]).unwrap()
    }

    #[test]
    fn test_compute_placement() {
        let registrar = Registrar::new();
        let record = marker("m", "a", 0);
        let t = registrar.compute_placement(
            &record,
            Point3::new(1.0, 1.5, 1.0),
            Rotation::from_yaw_deg(45.0),
        );
        assert_eq!(t.translation, Point3::new(9.0, 1.5, 5.0));
        // Camera orientation is not used
        assert_eq!(t.rotation, record.model_orientation);
    }

    #[test]
    fn test_unknown_marker() {
        let mut catalog = catalog();
        let mut registrar = Registrar::new();
        let err = registrar
            .register(&mut catalog, "NOPE", Point3::ZERO, Rotation::IDENTITY)
            .unwrap_err();
        assert_eq!(err, NavError::MarkerNotFound("NOPE".into()));
        assert_eq!(catalog.active().id, "a");
        assert_eq!(registrar.registrations(), 0);
    }

    #[test]
    fn test_register_switches_building() {
        let mut catalog = catalog();
        let mut registrar = Registrar::new();
        let reg = registrar
            .register(&mut catalog, "B-STAIRS", Point3::ZERO, Rotation::IDENTITY)
            .unwrap();
        assert_eq!(reg.building_id, "b");
        assert_eq!(reg.floor, 1);
        assert_eq!(catalog.active().id, "b");
        assert_eq!(registrar.registrations(), 1);
    }
}

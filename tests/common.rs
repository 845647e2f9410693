//! Shared fixtures for Disha-Nav integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use crossbeam_channel::Receiver;
use disha_nav::{Building, Floor, NavEvent, Node, NodeId, Point3, PointOfInterest};

/// Install a logger once; repeated calls are harmless.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Path of the bundled demo building
pub fn demo_tower_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/buildings/demo_tower.yaml")
}

pub fn demo_tower() -> Building {
    Building::load(&demo_tower_path()).expect("demo building loads")
}

/// Square grid of `n × n` nodes, `spacing` apart, 4-connected both ways.
///
/// Node ids are `row * n + col`; positions are `(col, 0, row) * spacing`.
pub fn grid_floor(level: i32, n: u32, spacing: f32) -> Floor {
    let mut floor = Floor::new(format!("grid{}", level), level);
    for row in 0..n {
        for col in 0..n {
            let pos = Point3::new(col as f32 * spacing, 0.0, row as f32 * spacing);
            floor.add_node(Node::new(NodeId(row * n + col), pos)).unwrap();
        }
    }
    for row in 0..n {
        for col in 0..n {
            let id = NodeId(row * n + col);
            if col + 1 < n {
                floor.connect(id, NodeId(row * n + col + 1)).unwrap();
            }
            if row + 1 < n {
                floor.connect(id, NodeId((row + 1) * n + col)).unwrap();
            }
        }
    }
    floor.with_pois([PointOfInterest::new(
        "Far Corner",
        "test",
        Point3::new((n - 1) as f32 * spacing, 0.0, (n - 1) as f32 * spacing),
    )])
}

pub fn drain(rx: &Receiver<NavEvent>) -> Vec<NavEvent> {
    rx.try_iter().collect()
}

/// Short tag per event kind, for order assertions
pub fn kinds(events: &[NavEvent]) -> Vec<&'static str> {
    events
        .iter()
        .map(|e| match e {
            NavEvent::Started { .. } => "started",
            NavEvent::Replanned { .. } => "replanned",
            NavEvent::ReplanFailed(_) => "failed",
            NavEvent::Progress(_) => "progress",
            NavEvent::Arrived => "arrived",
            NavEvent::Stopped => "stopped",
        })
        .collect()
}

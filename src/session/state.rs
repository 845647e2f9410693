//! Session state, destinations and events.

use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::error::NavError;
use crate::graph::{Building, PointOfInterest};

/// Navigation session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavState {
    /// No active navigation.
    #[default]
    Idle,

    /// Guiding towards a destination.
    Navigating,

    /// Destination reached. Transient: the session returns to `Idle` in the
    /// same tick.
    Arrived,
}

impl NavState {
    pub fn is_active(&self) -> bool {
        matches!(self, NavState::Navigating)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavState::Idle => "IDLE",
            NavState::Navigating => "NAVIGATING",
            NavState::Arrived => "ARRIVED",
        }
    }
}

/// Where the user wants to go, in building model space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub floor: i32,
    pub position: Point3,
    #[serde(default)]
    pub label: Option<String>,
}

impl Destination {
    pub fn new(floor: i32, position: Point3) -> Self {
        Self {
            floor,
            position,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Destination at a point of interest on floor `floor`.
    pub fn from_poi(floor: i32, poi: &PointOfInterest) -> Self {
        Self::new(floor, poi.position).with_label(poi.name.clone())
    }

    /// Look up a point of interest by name anywhere in `building`.
    pub fn find(building: &Building, poi_name: &str) -> Option<Self> {
        building
            .find_poi(poi_name)
            .map(|(floor, poi)| Self::from_poi(floor, poi))
    }
}

/// Notifications published by a navigation session.
///
/// Within one navigation the order is `Started`, then any mix of
/// `Replanned`/`ReplanFailed`/`Progress`, then `Arrived` or `Stopped`.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    Started {
        destination: Destination,
    },

    /// A new path replaced the previous one.
    Replanned {
        /// Path length in meters
        length: f32,
        /// Estimated walking time at the configured speed
        eta_secs: f32,
        points: usize,
    },

    /// Replanning failed; the previous path is kept but not rendered.
    ReplanFailed(NavError),

    /// Fraction of the initial ground distance covered, in [0, 1].
    Progress(f32),

    Arrived,

    Stopped,
}

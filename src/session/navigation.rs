//! Navigation session - replanning cadence, progress and arrival.
//!
//! The session is tick driven: the host calls [`NavigationSession::tick`]
//! with the live world position and the elapsed time. Nothing runs in the
//! background.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info};

use crate::config::{DishaConfig, SessionSection};
use crate::core::{Point3, Rotation};
use crate::error::{NavError, Result};
use crate::geometry::{GeometryPipeline, PathGeometry, PathRenderer};
use crate::graph::{Building, BuildingCatalog};
use crate::localization::{PlacementTransform, Registrar, Registration};
use crate::pathfinding::{Path, PathFinder};

use super::state::{Destination, NavEvent, NavState};

/// One user's guidance towards one destination at a time.
pub struct NavigationSession<R: PathRenderer> {
    config: SessionSection,
    finder: PathFinder,
    pipeline: GeometryPipeline<R>,

    state: NavState,
    destination: Option<Destination>,
    path: Option<Path>,

    /// Model placement from the last resolved marker
    placement: PlacementTransform,
    /// Floor of the last resolved marker
    current_floor: Option<i32>,
    floor_changed: bool,

    initial_ground: f32,
    progress: f32,
    since_replan: Duration,

    subscribers: Vec<Sender<NavEvent>>,
}

impl<R: PathRenderer> NavigationSession<R> {
    pub fn new(config: &DishaConfig, renderer: R) -> Self {
        Self {
            config: config.session.clone(),
            finder: PathFinder::new(config.pathfinding.clone()),
            pipeline: GeometryPipeline::new(config.geometry.clone(), renderer),
            state: NavState::Idle,
            destination: None,
            path: None,
            placement: PlacementTransform::IDENTITY,
            current_floor: None,
            floor_changed: false,
            initial_ground: 0.0,
            progress: 0.0,
            since_replan: Duration::ZERO,
            subscribers: Vec::new(),
        }
    }

    /// Receive every event published from now on.
    pub fn subscribe(&mut self) -> Receiver<NavEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Start guiding towards `destination`, planning immediately.
    ///
    /// A failed first plan does not abort the navigation: `ReplanFailed` is
    /// published and the next interval retries.
    pub fn navigate_to(
        &mut self,
        building: &Building,
        destination: Destination,
        live_world_position: Point3,
    ) -> Result<()> {
        if self.state != NavState::Idle {
            return Err(NavError::InvalidState(self.state.as_str()));
        }
        building.require_floor(destination.floor)?;

        let user = self.placement.world_to_model(live_world_position);
        self.initial_ground = user.ground_distance(&destination.position);
        self.progress = 0.0;
        self.state = NavState::Navigating;
        self.destination = Some(destination.clone());

        info!(
            "[Session] navigating to {} on floor {} ({:.1}m away)",
            destination.label.as_deref().unwrap_or("destination"),
            destination.floor,
            self.initial_ground
        );
        self.publish(NavEvent::Started { destination });

        self.replan(building, user);
        Ok(())
    }

    /// Advance the session by `dt`.
    ///
    /// Returns the state reached in this tick. `Arrived` is only ever
    /// returned here; the session itself is back to `Idle` afterwards.
    pub fn tick(
        &mut self,
        building: &Building,
        live_world_position: Point3,
        dt: Duration,
    ) -> NavState {
        if self.state != NavState::Navigating {
            return self.state;
        }

        let user = self.placement.world_to_model(live_world_position);

        self.since_replan += dt;
        if self.floor_changed || self.since_replan >= self.config.replan_interval() {
            self.replan(building, user);
        }

        let Some(target) = self.target() else {
            return self.state;
        };

        if user.ground_distance(&target) <= self.config.arrival_radius {
            self.progress = 1.0;
            self.publish(NavEvent::Progress(1.0));
            self.state = NavState::Arrived;
            info!("[Session] arrived");
            self.publish(NavEvent::Arrived);
            self.reset();
            return NavState::Arrived;
        }

        self.progress = self.compute_progress(user);
        self.publish(NavEvent::Progress(self.progress));
        self.state
    }

    /// Cancel any navigation and release everything rendered.
    pub fn stop(&mut self) {
        let was_active = self.state != NavState::Idle || self.destination.is_some();
        self.reset();
        if was_active {
            info!("[Session] stopped");
            self.publish(NavEvent::Stopped);
        }
    }

    /// Adopt a new placement. A floor change while navigating replans on the
    /// next tick.
    pub fn apply_registration(&mut self, registration: &Registration) {
        self.placement = registration.transform;
        if self.current_floor != Some(registration.floor) {
            if self.state == NavState::Navigating {
                debug!(
                    "[Session] floor change {:?} -> {}, replanning",
                    self.current_floor, registration.floor
                );
                self.floor_changed = true;
            }
            self.current_floor = Some(registration.floor);
        }
    }

    /// Register against a scanned marker and adopt the placement.
    ///
    /// On failure the current placement is left untouched.
    pub fn register_marker(
        &mut self,
        registrar: &mut Registrar,
        catalog: &mut BuildingCatalog,
        marker_id: &str,
        camera_position: Point3,
        camera_orientation: Rotation,
    ) -> Result<Registration> {
        let registration =
            registrar.register(catalog, marker_id, camera_position, camera_orientation)?;
        self.apply_registration(&registration);
        Ok(registration)
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    /// Current path, kept across failed replans
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn placement(&self) -> &PlacementTransform {
        &self.placement
    }

    pub fn current_floor(&self) -> Option<i32> {
        self.current_floor
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn geometry(&self) -> &PathGeometry {
        self.pipeline.geometry()
    }

    pub fn pipeline(&self) -> &GeometryPipeline<R> {
        &self.pipeline
    }

    pub fn renderer(&self) -> &R {
        self.pipeline.renderer()
    }

    fn replan(&mut self, building: &Building, user: Point3) {
        self.since_replan = Duration::ZERO;
        self.floor_changed = false;

        let Some(dest) = self.destination.as_ref() else {
            return;
        };

        match self
            .finder
            .find_path(building, dest.floor, user, dest.position)
        {
            Ok(path) => {
                self.pipeline.show(&path);
                let eta_secs = path.length / self.config.walking_speed;
                debug!(
                    "[Session] replanned: {} points, {:.2}m, eta {:.0}s",
                    path.len(),
                    path.length,
                    eta_secs
                );
                let event = NavEvent::Replanned {
                    length: path.length,
                    eta_secs,
                    points: path.len(),
                };
                self.path = Some(path);
                self.publish(event);
            }
            Err(e) => {
                self.pipeline.clear();
                debug!("[Session] replan failed: {}", e);
                self.publish(NavEvent::ReplanFailed(e));
            }
        }
    }

    /// Final path point, or the destination while no path exists
    fn target(&self) -> Option<Point3> {
        self.path
            .as_ref()
            .and_then(Path::end)
            .or_else(|| self.destination.as_ref().map(|d| d.position))
    }

    fn compute_progress(&self, user: Point3) -> f32 {
        let Some(dest) = self.destination.as_ref() else {
            return 0.0;
        };
        if self.initial_ground <= f32::EPSILON {
            return 0.0;
        }
        let remaining = user.ground_distance(&dest.position);
        (1.0 - remaining / self.initial_ground).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.pipeline.clear();
        self.state = NavState::Idle;
        self.destination = None;
        self.path = None;
        self.floor_changed = false;
        self.since_replan = Duration::ZERO;
    }

    fn publish(&mut self, event: NavEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

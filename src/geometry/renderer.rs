//! Rendering collaborator interface.

use std::collections::HashSet;

use crate::core::Point3;

/// Opaque handle to something a renderer is displaying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

/// Display layer consuming path geometry.
///
/// Positions are in building model space; the display layer places the model
/// with the current placement transform.
pub trait PathRenderer {
    /// Show the continuous path curve
    fn draw_curve(&mut self, points: &[Point3]) -> RenderHandle;

    /// Show a direction indicator
    fn place_indicator(&mut self, position: Point3, direction: Point3) -> RenderHandle;

    /// Show a turn waypoint marker
    fn place_waypoint(&mut self, position: Point3) -> RenderHandle;

    /// Remove a previously created element
    fn release(&mut self, handle: RenderHandle);
}

/// Headless renderer: draws nothing, tracks which handles are live.
#[derive(Debug, Default)]
pub struct NullRenderer {
    next: u64,
    live: HashSet<RenderHandle>,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements created and not yet released
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn issue(&mut self) -> RenderHandle {
        self.next += 1;
        let handle = RenderHandle(self.next);
        self.live.insert(handle);
        handle
    }
}

impl PathRenderer for NullRenderer {
    fn draw_curve(&mut self, _points: &[Point3]) -> RenderHandle {
        self.issue()
    }

    fn place_indicator(&mut self, _position: Point3, _direction: Point3) -> RenderHandle {
        self.issue()
    }

    fn place_waypoint(&mut self, _position: Point3) -> RenderHandle {
        self.issue()
    }

    fn release(&mut self, handle: RenderHandle) {
        self.live.remove(&handle);
    }
}

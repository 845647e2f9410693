//! # Disha-Nav: Indoor Navigation Engine
//!
//! Guides a walking user through a multi-floor building towards a chosen
//! destination, replanning as they move.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::time::Duration;
//! use disha_nav::{Building, Destination, DishaConfig, NavigationSession, NullRenderer, Point3};
//!
//! let building = Building::load(Path::new("data/buildings/demo_tower.yaml")).unwrap();
//! let mut session = NavigationSession::new(&DishaConfig::default(), NullRenderer::new());
//! let events = session.subscribe();
//!
//! let destination = Destination::find(&building, "Cafe").unwrap();
//! session.navigate_to(&building, destination, Point3::ZERO).unwrap();
//! session.tick(&building, Point3::new(1.0, 0.0, 0.0), Duration::from_millis(100));
//!
//! for event in events.try_iter() {
//!     println!("{:?}", event);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! - **Y-up**: the walkable ground plane is X/Z
//! - Graph positions, paths and geometry are in building **model space**
//! - Live camera positions are in the **world frame**; a
//!   [`PlacementTransform`] from a scanned marker maps between the two
//!
//! ## Architecture
//!
//! - [`core`]: Point and rotation types
//! - [`graph`]: Buildings, floors and walkability graphs
//! - [`pathfinding`]: A* search and path simplification
//! - [`localization`]: Marker registration
//! - [`geometry`]: Curves, indicators and waypoints for rendering
//! - [`session`]: Replanning, progress and arrival
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   marker id ──▶ Registrar ──▶ PlacementTransform
//!                                      │ world_to_model
//!   live position ─────────────────────▼
//!                              NavigationSession ──tick──▶ PathFinder ──▶ Path
//!                                      │                                  │
//!                                      ▼                                  ▼
//!                               NavEvent channel               GeometryPipeline ──▶ PathRenderer
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod localization;
pub mod pathfinding;
pub mod session;

pub use config::{ConfigLoadError, DishaConfig};
pub use self::core::{Point3, Rotation};
pub use error::{NavError, Result};
pub use geometry::{GeometryPipeline, NullRenderer, PathGeometry, PathRenderer, RenderHandle};
pub use graph::{Building, BuildingCatalog, Floor, MarkerRecord, Node, NodeId, PointOfInterest};
pub use localization::{PlacementTransform, Registrar, Registration};
pub use pathfinding::{Path, PathFinder};
pub use session::{Destination, NavEvent, NavState, NavigationSession};

//! Render geometry for planned paths.
//!
//! ```text
//! Path points ──raise──▶ Bezier curve ──arc length──▶ indicators
//!                  └──────turn angle──────▶ waypoints
//! ```
//!
//! The result is pushed to a [`PathRenderer`] by [`GeometryPipeline`], which
//! owns the handles of everything it created.

mod curve;
mod pipeline;
mod renderer;

pub use curve::{Indicator, build_curve, place_indicators, raise_points, turn_waypoints};
pub use pipeline::{GeometryPipeline, PathGeometry};
pub use renderer::{NullRenderer, PathRenderer, RenderHandle};

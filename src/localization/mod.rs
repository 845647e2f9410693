//! Marker-based registration of the building model against the real world.
//!
//! A decoded marker id resolves to a [`MarkerRecord`](crate::graph::MarkerRecord)
//! with known world and model reference positions. Combined with the live
//! camera position this yields a [`PlacementTransform`].

mod placement;
mod registrar;

pub use placement::PlacementTransform;
pub use registrar::{Registrar, Registration};

//! Navigation sessions.
//!
//! ```text
//! Idle ──navigate_to──▶ Navigating ──within arrival radius──▶ Arrived ──▶ Idle
//!                           │
//!                           └──stop──▶ Idle
//! ```

mod navigation;
mod state;

pub use navigation::NavigationSession;
pub use state::{Destination, NavEvent, NavState};

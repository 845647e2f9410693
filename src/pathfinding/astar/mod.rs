//! A* search over per-floor node graphs.
//!
//! - Cost of entering node `b` from `a`: `distance(a, b) * b.cost_multiplier`
//! - Heuristic: straight-line distance to the goal node
//! - Frontier order: lowest `f`, then lowest `h`, then insertion order
//! - Closed nodes are never reopened

mod planner;
mod types;

pub use planner::search;
pub use types::SearchResult;

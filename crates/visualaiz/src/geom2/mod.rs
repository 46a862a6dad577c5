//! 2D Geometry Kernel (points, edges, circles).
//!
//! Purpose
//! - Provide the small set of pure primitives the visualizer annotates shapes
//!   with: distance, orientation (cross product), canonical edge ordering, and
//!   duplicate-edge removal.
//! - Keep the API minimal and numerically explicit: exact predicates by
//!   default, `_eps` variants reading `GeomCfg` where a tolerance is wanted.
//!
//! Code cross-refs: `Point`, `Edge`, `Circle`, `EdgeKey`, `GeomCfg`

mod kernel;
mod key;
pub mod rand;
mod types;

pub use kernel::{
    calculate_distance, cross_product, normalize_edge, orientation, remove_duplicate_edges, turn,
    turn_eps, Turn,
};
pub use key::EdgeKey;
pub use types::{Circle, CircleError, Edge, GeomCfg, Point};

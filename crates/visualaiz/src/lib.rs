//! Core geometry for the visualizer.
//!
//! The UI layer draws points, edges, and circles and calls into this crate to
//! annotate or classify them. Everything here is a pure function over `Copy`
//! values; no state is kept between calls.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes
//!   are fine when they improve quality.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Circle, Edge, GeomCfg, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_edge_soup, draw_points, EdgeSoupCfg, PointCloudCfg, ReplayToken,
    };
    pub use crate::geom2::{
        calculate_distance, cross_product, normalize_edge, orientation, remove_duplicate_edges,
        turn, turn_eps, Circle, CircleError, Edge, EdgeKey, GeomCfg, Point, Turn,
    };
    pub use nalgebra::Vector2 as Vec2;
}

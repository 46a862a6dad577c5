//! Pure 2D primitives: distance, orientation, canonical edges, dedup.
//!
//! Every function here is stateless and total on finite input. Non-finite
//! coordinates are not validated; results follow IEEE arithmetic.

use rustc_hash::FxHashSet;

use super::types::{lex_le, Edge, Point};

/// Euclidean distance `|b - a|`.
#[inline]
pub fn calculate_distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive if `c` is left of the directed line a→b (counterclockwise turn),
/// negative if right, zero if collinear (always zero for `a == b`).
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Same as [`orientation`].
#[inline]
pub fn cross_product(a: Point, b: Point, c: Point) -> f64 {
    orientation(a, b, c)
}

/// Turn direction of an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Turn {
    /// Classify a signed orientation value; `|o| <= eps` is collinear.
    #[inline]
    pub fn from_orientation(o: f64, eps: f64) -> Turn {
        if o > eps {
            Turn::CounterClockwise
        } else if o < -eps {
            Turn::Clockwise
        } else {
            Turn::Collinear
        }
    }
}

/// Exact turn: the sign of `orientation(a, b, c)`.
#[inline]
pub fn turn(a: Point, b: Point, c: Point) -> Turn {
    Turn::from_orientation(orientation(a, b, c), 0.0)
}

/// Turn with a collinearity band of half-width `eps` (see `GeomCfg::eps_collinear`).
#[inline]
pub fn turn_eps(a: Point, b: Point, c: Point, eps: f64) -> Turn {
    Turn::from_orientation(orientation(a, b, c), eps.abs())
}

/// Canonical representative of an undirected edge: first endpoint is
/// lexicographically <= the second. Already-ordered edges come back unchanged.
#[inline]
pub fn normalize_edge(edge: Edge) -> Edge {
    if lex_le(edge.a, edge.b) {
        edge
    } else {
        edge.reversed()
    }
}

/// Drop repeated undirected edges, keeping the first occurrence of each.
///
/// Survivors keep their input orientation and order. Duplicate detection uses
/// exact coordinate bits of the normalized edge (`EdgeKey`), never rounding.
pub fn remove_duplicate_edges(edges: &[Edge]) -> Vec<Edge> {
    let mut seen = FxHashSet::default();
    seen.reserve(edges.len());
    let mut out = Vec::with_capacity(edges.len());
    for e in edges {
        if seen.insert(e.key()) {
            out.push(*e);
        }
    }
    out
}

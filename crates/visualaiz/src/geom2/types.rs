//! Basic 2D value types and tolerances used by the kernel.
//!
//! - `GeomCfg`: centralizes epsilons for collinearity and circle membership.
//! - `Point`: plain `Vector2<f64>`; identity is its coordinates.
//! - `Edge`: undirected segment stored as an ordered pair `(a, b)`.
//! - `Circle`: center plus non-negative radius.
//!
//! Code cross-refs: `kernel::{normalize_edge, remove_duplicate_edges}`, `key::EdgeKey`

use std::fmt;

use nalgebra::Vector2;

use super::kernel::{calculate_distance, normalize_edge};
use super::key::EdgeKey;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// Only the `_eps` variants of the predicates read it; the exact primitives
/// (`orientation`, `normalize_edge`, ...) never do.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// `|orientation| <= eps_collinear` is reported as collinear by `turn_eps`.
    pub eps_collinear: f64,
    /// Slack added to the radius in `Circle::contains`.
    pub eps_contains: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_collinear: 1e-12,
            eps_contains: 1e-9,
        }
    }
}

/// Undirected edge between two points.
///
/// Invariants:
/// - `(a, b)` and `(b, a)` denote the same edge; `PartialEq` is structural,
///   so compare `normalized()` forms (or `key()`) for undirected equality.
/// - After `normalized()`, `a <= b` lexicographically (x first, then y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    /// Same edge with endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        calculate_distance(self.a, self.b)
    }
    /// True if the endpoints are already in canonical order.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        lex_le(self.a, self.b)
    }
    #[inline]
    pub fn normalized(&self) -> Self {
        normalize_edge(*self)
    }
    /// Exact dedup key of the undirected edge.
    #[inline]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::of(self)
    }
}

impl From<(Point, Point)> for Edge {
    #[inline]
    fn from((a, b): (Point, Point)) -> Self {
        Self { a, b }
    }
}

/// Lexicographic `p <= q`: compare x first, y on ties.
#[inline]
pub(crate) fn lex_le(p: Point, q: Point) -> bool {
    p.x < q.x || (p.x == q.x && p.y <= q.y)
}

/// Circle given by center and radius.
///
/// Invariants:
/// - `radius >= 0` when built through `try_new`; `new` does not check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Rejected circle parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleError {
    /// Radius below zero.
    NegativeRadius { radius: f64 },
    /// Radius or center coordinate is NaN or infinite.
    NonFinite,
}

impl fmt::Display for CircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircleError::NegativeRadius { radius } => {
                write!(f, "circle radius must be non-negative (got {})", radius)
            }
            CircleError::NonFinite => write!(f, "circle center and radius must be finite"),
        }
    }
}

impl std::error::Error for CircleError {}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Checked constructor: finite center, finite non-negative radius.
    pub fn try_new(center: Point, radius: f64) -> Result<Self, CircleError> {
        if !(radius.is_finite() && center.x.is_finite() && center.y.is_finite()) {
            return Err(CircleError::NonFinite);
        }
        if radius < 0.0 {
            return Err(CircleError::NegativeRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Closed-disk membership with slack: `|p - center| <= radius + eps`.
    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        calculate_distance(self.center, p) <= self.radius + eps
    }

    /// Closed-disk membership using `GeomCfg::default().eps_contains`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.contains_eps(p, GeomCfg::default().eps_contains)
    }
}

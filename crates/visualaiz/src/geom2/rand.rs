//! Random point sets and edge soups in 2D (replay tokens).
//!
//! Purpose
//! - Provide small, deterministic generators for the shapes the kernel is fed:
//!   scattered points and edge lists with repeated (possibly reversed) edges.
//!
//! Model
//! - Points are uniform in `[-extent, extent]²`, optionally snapped to a grid
//!   of spacing `snap` so that coincident endpoints actually occur.
//! - Edge soups draw a vertex pool first, then edges between distinct pool
//!   indices; each edge is reversed with probability `reverse_prob`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Edge`, `remove_duplicate_edges`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Edge, Point};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    pub count: usize,
    /// Half-width of the sampling square. Clamped to >= 0.
    pub extent: f64,
    /// Grid spacing for snapping; `<= 0` disables snapping.
    pub snap: f64,
}
impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 32,
            extent: 10.0,
            snap: 1.0,
        }
    }
}

/// Edge-soup sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct EdgeSoupCfg {
    /// Size of the vertex pool. At least 2 are drawn.
    pub vertices: usize,
    /// Number of edges in the soup (duplicates included).
    pub edges: usize,
    /// Probability of storing an edge as `(b, a)`. Clamped to [0, 1].
    pub reverse_prob: f64,
    pub extent: f64,
    pub snap: f64,
}
impl Default for EdgeSoupCfg {
    fn default() -> Self {
        Self {
            vertices: 16,
            edges: 64,
            reverse_prob: 0.5,
            extent: 10.0,
            snap: 1.0,
        }
    }
}

fn sample_point<R: Rng>(rng: &mut R, extent: f64, snap: f64) -> Point {
    let e = extent.max(0.0);
    let mut draw = || {
        let v = (rng.gen::<f64>() * 2.0 - 1.0) * e;
        if snap > 0.0 {
            (v / snap).round() * snap
        } else {
            v
        }
    };
    let x = draw();
    let y = draw();
    Vector2::new(x, y)
}

/// Draw `cfg.count` points.
pub fn draw_points(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| sample_point(&mut rng, cfg.extent, cfg.snap))
        .collect()
}

/// Draw an edge soup over a random vertex pool.
///
/// Notes
/// - Endpoints are distinct pool entries, but snapping may still make them
///   coincide (zero-length edges are kept).
pub fn draw_edge_soup(cfg: EdgeSoupCfg, tok: ReplayToken) -> Vec<Edge> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(2);
    let pool: Vec<Point> = (0..n)
        .map(|_| sample_point(&mut rng, cfg.extent, cfg.snap))
        .collect();
    let p_rev = cfg.reverse_prob.max(0.0).min(1.0);
    (0..cfg.edges)
        .map(|_| {
            let i = rng.gen_range(0..n);
            // shift by 1..n so j != i
            let j = (i + rng.gen_range(1..n)) % n;
            let e = Edge::new(pool[i], pool[j]);
            if rng.gen_bool(p_rev) {
                e.reversed()
            } else {
                e
            }
        })
        .collect()
}

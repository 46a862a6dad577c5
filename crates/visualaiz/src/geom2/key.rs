//! Exact hash keys for undirected edges.

use super::types::Edge;

/// Bit-exact key of a normalized edge: `[a.x, a.y, b.x, b.y]` as IEEE-754 bits.
///
/// `-0.0` is folded onto `0.0` so the key agrees with `==` on coordinates.
/// Distinct finite values always give distinct keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey([u64; 4]);

impl EdgeKey {
    pub fn of(edge: &Edge) -> Self {
        let e = edge.normalized();
        EdgeKey([
            coord_bits(e.a.x),
            coord_bits(e.a.y),
            coord_bits(e.b.x),
            coord_bits(e.b.y),
        ])
    }
}

#[inline]
fn coord_bits(v: f64) -> u64 {
    // 0.0 == -0.0 but their bits differ
    if v == 0.0 {
        0u64
    } else {
        v.to_bits()
    }
}

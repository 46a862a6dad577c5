//! Draw a few edge soups and show how much de-duplication removes.
//!
//! Usage:
//!   cargo run -p visualaiz --example edge_dedup -- [seed]
//!
//! Prints per sample: soup size, unique edges, and the longest unique edge.

use visualaiz::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let cfg = EdgeSoupCfg {
        vertices: 12,
        edges: 80,
        ..EdgeSoupCfg::default()
    };
    let mut tok = ReplayToken::new(seed, 0);
    for i in 0..5 {
        let soup = draw_edge_soup(cfg, tok);
        let unique = remove_duplicate_edges(&soup);
        let longest = unique.iter().map(Edge::length).fold(0.0, f64::max);
        println!(
            "sample {i}: edges={}, unique={}, longest={longest:.3}",
            soup.len(),
            unique.len()
        );
        tok = tok.next_index();
    }
}

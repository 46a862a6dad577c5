//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   experiments. Breaking changes are allowed and expected.
//! - Names follow the web app (`calculateDistance`, `crossProduct`, ...) in
//!   snake case so call sites read the same on both sides.

// 2D kernel
pub use crate::geom2::{
    calculate_distance, cross_product, normalize_edge, orientation, remove_duplicate_edges, turn,
    turn_eps, Circle, CircleError, Edge, EdgeKey, GeomCfg, Point, Turn,
};
// 2D samplers
pub use crate::geom2::rand::{
    draw_edge_soup, draw_points, EdgeSoupCfg, PointCloudCfg, ReplayToken as SampleReplay,
};

/// Parse `"x,y"` into a point. Whitespace around either number is ignored.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|err| format!("bad x coordinate `{}`: {err}", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|err| format!("bad y coordinate `{}`: {err}", y.trim()))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_signed_and_spaced() {
        assert_eq!(parse_point("1,2").unwrap(), Point::new(1.0, 2.0));
        assert_eq!(parse_point(" -1.5 , 2e3 ").unwrap(), Point::new(-1.5, 2000.0));
    }

    #[test]
    fn parse_point_rejects_malformed() {
        assert!(parse_point("1").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("1,2,3").is_err());
    }

    #[test]
    fn alias_names_agree() {
        let (a, b, c) = (Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0));
        assert_eq!(cross_product(a, b, c), orientation(a, b, c));
        assert_eq!(turn(a, b, c), Turn::CounterClockwise);
    }
}

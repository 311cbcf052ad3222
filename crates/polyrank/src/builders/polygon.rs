//! Regular and star polygons `{n/d}`, including compounds when `gcd(n, d) > 1`.

use std::f64::consts::PI;

use super::{assemble, check_polygon_params, circumradius};
use crate::cfg::BuildCfg;
use crate::connectivity::facet_components;
use crate::construction::Construction;
use crate::error::Result;
use crate::model::{ElementList, Polytope};
use crate::point::Point;

/// The polygon `{n/d}` with unit edges.
pub fn polygon(n: usize, d: usize) -> Result<Polytope> {
    polygon_with(n, d, BuildCfg::default())
}

/// The polygon `{n/d}`: `n` vertices on a circle, edge `i` joining vertex `i`
/// to vertex `(i + d) mod n`. For `g = gcd(n, d) > 1` the edges close into `g`
/// separate cycles, returned as `g` components (a compound of `{n/g / d/g}`).
pub fn polygon_with(n: usize, d: usize, cfg: BuildCfg) -> Result<Polytope> {
    check_polygon_params(n, d)?;
    let r = circumradius(n, d, cfg.edge_len);
    let vertices: Vec<Point> = (0..n)
        .map(|k| {
            let a = 2.0 * PI * k as f64 / n as f64;
            Point::new(vec![r * a.cos(), r * a.sin()])
        })
        .collect();
    let edges: ElementList = (0..n).map(|i| vec![i, (i + d) % n]).collect();
    let comps = facet_components(&edges, 1, n)?;
    assemble(2, 2, vertices, vec![edges, comps], Construction::Polygon { n, d })
}

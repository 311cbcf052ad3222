//! `{n/d}` antiprisms: two parallel `{n/d}` bases joined by a band of triangles.

use std::f64::consts::PI;

use super::{check_star_params, circumradius, layer_height, polyhedron, ring};
use crate::construction::Construction;
use crate::error::Result;
use crate::model::{ElementList, Polytope};

/// The uniform `{n/d}` antiprism with unit edges.
///
/// Top vertex `T_k` (index `k`) sits at angle `2πk/n`; bottom vertex `B_k`
/// (index `n + k`) at `2πk/n + πd/n`, midway between `T_k` and `T_{k+d}`.
/// Requires `gcd(n, d) = 1` and a real band height (`d/n < 2/3`).
pub fn antiprism(n: usize, d: usize) -> Result<Polytope> {
    check_star_params("antiprism", n, d)?;
    let r = circumradius(n, d, 1.0);
    let twist = PI * d as f64 / n as f64;
    let h = layer_height("antiprism", r, r, twist, 1.0)?;
    let mut vertices = ring(n, r, 0.0, h / 2.0);
    vertices.extend(ring(n, r, twist, -h / 2.0));

    let next = |k: usize| (k + d) % n;
    let mut edges = ElementList::with_capacity(4 * n);
    // 0..n: top base; n..2n: bottom base.
    edges.extend((0..n).map(|k| vec![k, next(k)]));
    edges.extend((0..n).map(|k| vec![n + k, n + next(k)]));
    // 2n..3n: T_k - B_k; 3n..4n: B_k - T_{k+d}.
    edges.extend((0..n).map(|k| vec![k, n + k]));
    edges.extend((0..n).map(|k| vec![n + k, next(k)]));

    let mut faces = ElementList::with_capacity(2 * n + 2);
    faces.push((0..n).collect());
    faces.push((n..2 * n).collect());
    // T_k T_{k+d} B_k, then B_k B_{k+d} T_{k+d}.
    faces.extend((0..n).map(|k| vec![k, 2 * n + k, 3 * n + k]));
    faces.extend((0..n).map(|k| vec![n + k, 3 * n + k, 2 * n + next(k)]));

    polyhedron(vertices, edges, faces, Construction::Antiprism { n, d })
}

//! Cupolae over `{n/d}` and the two shapes that stand in for them when the
//! cupola itself does not close up.
//!
//! All three put an `{n/d}` top ring at angle 0 and a bottom ring on the
//! `{2n/d}` circle, rotated by `πd/(2n)`. Angles below are in units of
//! `π/(2n)`: top vertex `T_k` sits at `4k`, bottom vertex `B_j` at `d + 2j`,
//! so `T_k` joins `B_{2k}` and `T_{k+d}` joins `B_{2k+d}`.

use std::f64::consts::PI;

use super::{check_star_params, circumradius, layer_height, polyhedron, ring};
use crate::construction::Construction;
use crate::error::{PolyError, Result};
use crate::model::{ElementList, Polytope};
use crate::point::Point;

/// Shared ring geometry: `(R_top, R_bottom, twist, height)`.
fn rings(kind: &str, n: usize, d: usize) -> Result<(f64, f64, f64, f64)> {
    let r1 = circumradius(n, d, 1.0);
    let r2 = circumradius(2 * n, d, 1.0);
    let twist = PI * d as f64 / (2 * n) as f64;
    let h = layer_height(kind, r1, r2, twist, 1.0)?;
    Ok((r1, r2, twist, h))
}

/// The `{n/d}` cupola: an `{n/d}` top, a `{2n/d}` base, `n` squares and `n`
/// triangles. Needs `gcd(n, d) = 1` and odd `d`; even `d` makes the base a
/// compound, see [`cuploid`].
pub fn cupola(n: usize, d: usize) -> Result<Polytope> {
    check_star_params("cupola", n, d)?;
    if d % 2 == 0 {
        return Err(PolyError::Unsupported(format!(
            "cupola {{{n}/{d}}} has a compound base for even d; use the cuploid"
        )));
    }
    let (r1, r2, twist, h) = rings("cupola", n, d)?;
    let mut vertices = ring(n, r1, 0.0, h / 2.0);
    vertices.extend(ring(2 * n, r2, twist, -h / 2.0));

    let (m, b) = (2 * n, n);
    let mut edges = ElementList::with_capacity(5 * n);
    edges.extend((0..n).map(|k| vec![k, (k + d) % n]));
    edges.extend((0..m).map(|j| vec![b + j, b + (j + d) % m]));
    // 3n..4n: T_k - B_{2k}; 4n..5n: T_{k+d} - B_{2k+d}.
    edges.extend((0..n).map(|k| vec![k, b + 2 * k]));
    edges.extend((0..n).map(|k| vec![(k + d) % n, b + (2 * k + d) % m]));

    let mut faces = ElementList::with_capacity(2 * n + 2);
    faces.push((0..n).collect());
    faces.push((n..3 * n).collect());
    faces.extend((0..n).map(|k| vec![k, n + 2 * k, 3 * n + k, 4 * n + k]));
    faces.extend(
        (0..n).map(|k| vec![4 * n + k, n + (2 * k + d) % m, 3 * n + (k + d) % n]),
    );

    polyhedron(vertices, edges, faces, Construction::Cupola { n, d })
}

/// The `{n/d}` cuploid for even `d`: a cupola whose base keeps only one of
/// the two `{n/(d/2)}` rings of the compound `{2n/d}` and drops the base face.
/// Every base edge is shared by one square and one triangle; the result is a
/// one-sided surface with Euler characteristic 1.
pub fn cuploid(n: usize, d: usize) -> Result<Polytope> {
    check_star_params("cuploid", n, d)?;
    if d % 2 == 1 {
        return Err(PolyError::Unsupported(format!(
            "cuploid {{{n}/{d}}} needs even d; use the cupola"
        )));
    }
    let (r1, r2, twist, h) = rings("cuploid", n, d)?;
    // Base vertex i is B_{2i}.
    let mut vertices = ring(n, r1, 0.0, h / 2.0);
    vertices.extend(ring(n, r2, twist, -h / 2.0));

    let half = d / 2;
    let mut edges = ElementList::with_capacity(4 * n);
    edges.extend((0..n).map(|k| vec![k, (k + d) % n]));
    edges.extend((0..n).map(|i| vec![n + i, n + (i + half) % n]));
    edges.extend((0..n).map(|k| vec![k, n + k]));
    edges.extend((0..n).map(|k| vec![(k + d) % n, n + (k + half) % n]));

    let mut faces = ElementList::with_capacity(2 * n + 1);
    faces.push((0..n).collect());
    faces.extend((0..n).map(|k| vec![k, n + k, 2 * n + k, 3 * n + k]));
    faces.extend(
        (0..n).map(|k| vec![3 * n + k, n + (k + half) % n, 2 * n + (k + d) % n]),
    );

    polyhedron(vertices, edges, faces, Construction::Cuploid { n, d })
}

/// The `{n/d}` cupolaic blend: two cupolae, the second rotated by `π/n`,
/// blended along their shared `{2n/d}` base. The base face cancels and each
/// bottom edge joins a square of one cupola to a triangle of the other.
/// Needs `gcd(n, d) = 1` and odd `d`.
pub fn cupolaic_blend(n: usize, d: usize) -> Result<Polytope> {
    check_star_params("cupolaic blend", n, d)?;
    if d % 2 == 0 {
        return Err(PolyError::Unsupported(format!(
            "cupolaic blend {{{n}/{d}}} needs odd d"
        )));
    }
    let (r1, r2, twist, h) = rings("cupolaic blend", n, d)?;
    // T_k at 0..n, U_k (rotated top) at n..2n, B_j at 2n..4n.
    let mut vertices: Vec<Point> = ring(n, r1, 0.0, h / 2.0);
    vertices.extend(ring(n, r1, PI / n as f64, h / 2.0));
    vertices.extend(ring(2 * n, r2, twist, -h / 2.0));

    let (m, b) = (2 * n, 2 * n);
    let next = |k: usize| (k + d) % n;
    let mut edges = ElementList::with_capacity(8 * n);
    edges.extend((0..n).map(|k| vec![k, next(k)]));
    edges.extend((0..n).map(|k| vec![n + k, n + next(k)]));
    edges.extend((0..m).map(|j| vec![b + j, b + (j + d) % m]));
    // 4n..6n: lateral edges of the T cupola; 6n..8n: of the U cupola.
    edges.extend((0..n).map(|k| vec![k, b + 2 * k]));
    edges.extend((0..n).map(|k| vec![next(k), b + (2 * k + d) % m]));
    edges.extend((0..n).map(|k| vec![n + k, b + 2 * k + 1]));
    edges.extend((0..n).map(|k| vec![n + next(k), b + (2 * k + 1 + d) % m]));

    let mut faces = ElementList::with_capacity(4 * n + 2);
    faces.push((0..n).collect());
    faces.push((n..2 * n).collect());
    faces.extend((0..n).map(|k| vec![k, b + 2 * k, 4 * n + k, 5 * n + k]));
    faces.extend((0..n).map(|k| vec![5 * n + k, b + (2 * k + d) % m, 4 * n + next(k)]));
    faces.extend((0..n).map(|k| vec![n + k, b + 2 * k + 1, 6 * n + k, 7 * n + k]));
    faces.extend(
        (0..n).map(|k| vec![7 * n + k, b + (2 * k + 1 + d) % m, 6 * n + next(k)]),
    );

    polyhedron(vertices, edges, faces, Construction::CupolaicBlend { n, d })
}

//! Primitive builders: canonical polytopes with explicit element lists.
//!
//! Purpose
//! - Produce fully populated `Polytope`s (elements + coordinates + construction
//!   descriptor) for the families every product starts from.
//!
//! Families
//! - `bits`: hypercube, simplex and cross-polytope, enumerated over bit
//!   patterns with flat location tables so facets are always emitted before
//!   the cells that reference them.
//! - `polygon`: regular and star polygons `{n/d}`; compounds are split by the
//!   connectivity detector.
//! - `antiprism`, `cupola`: hand-derived element lists for `{n/d}` antiprisms,
//!   cupolae, cuploids and cupolaic blends, placed on two parallel rings.
//!
//! Every builder validates its output before returning it; the cupola family's
//! index arithmetic is checked by property tests over coprime `(n, d)`.

mod antiprism;
mod bits;
mod cupola;
mod polygon;

#[cfg(test)]
mod tests;

pub use antiprism::antiprism;
pub use bits::{cross, hypercube, simplex};
pub use cupola::{cupola, cupolaic_blend, cuploid};
pub use polygon::{polygon, polygon_with};

use std::f64::consts::PI;

use crate::cfg::EPS;
use crate::construction::Construction;
use crate::error::{PolyError, Result};
use crate::model::{ElementList, Polytope};
use crate::point::Point;

pub(crate) fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Rejects `(n, d)` pairs that do not name a polygon `{n/d}`.
fn check_polygon_params(n: usize, d: usize) -> Result<()> {
    if n == 0 {
        return Err(PolyError::InvalidParameters("polygon needs n > 0".into()));
    }
    if n < 3 {
        return Err(PolyError::InvalidParameters(format!(
            "polygon {{{n}/{d}}} needs at least 3 vertices"
        )));
    }
    if d == 0 || d >= n {
        return Err(PolyError::InvalidParameters(format!(
            "polygon {{{n}/{d}}} needs 0 < d < n"
        )));
    }
    if 2 * d == n {
        return Err(PolyError::InvalidParameters(format!(
            "polygon {{{n}/{d}}} degenerates into digons"
        )));
    }
    Ok(())
}

/// Parameter check shared by the antiprism and cupola families.
fn check_star_params(kind: &str, n: usize, d: usize) -> Result<()> {
    check_polygon_params(n, d)?;
    let g = gcd(n, d);
    if g != 1 {
        return Err(PolyError::Unsupported(format!(
            "{kind} {{{n}/{d}}} is only solved for gcd(n, d) = 1, got {g}"
        )));
    }
    Ok(())
}

/// Circumradius of `{n/d}` with the given edge length.
fn circumradius(n: usize, d: usize, edge: f64) -> f64 {
    edge / (2.0 * (PI * d as f64 / n as f64).sin())
}

/// Distance between two parallel rings of radii `r1`, `r2` whose vertices,
/// offset by angle `theta`, are joined by edges of length `edge`.
fn layer_height(kind: &str, r1: f64, r2: f64, theta: f64, edge: f64) -> Result<f64> {
    let h2 = edge * edge - (r1 * r1 + r2 * r2 - 2.0 * r1 * r2 * theta.cos());
    if h2 <= EPS {
        return Err(PolyError::Unsupported(format!(
            "{kind}: lateral edges cannot reach between the bases (h^2 = {h2:.3e})"
        )));
    }
    Ok(h2.sqrt())
}

/// `count` points on a circle of `radius` at height `z`, the `k`-th at angle
/// `phase + 2πk/count`.
fn ring(count: usize, radius: f64, phase: f64, z: f64) -> Vec<Point> {
    (0..count)
        .map(|k| {
            let a = phase + 2.0 * PI * k as f64 / count as f64;
            Point::new(vec![radius * a.cos(), radius * a.sin(), z])
        })
        .collect()
}

/// Wraps explicit element lists into a validated polytope. Components are
/// stored with their facets ascending, as the connectivity detector emits them.
fn assemble(
    rank: usize,
    dim: usize,
    vertices: Vec<Point>,
    mut ranks: Vec<ElementList>,
    construction: Construction,
) -> Result<Polytope> {
    if let Some(top) = ranks.last_mut() {
        for comp in top.iter_mut() {
            comp.sort_unstable();
        }
        top.sort_unstable_by_key(|comp| comp.first().copied());
    }
    let poly = Polytope {
        rank: rank as isize,
        dim,
        vertices,
        ranks,
        construction,
    };
    poly.validate()?;
    tracing::debug!(construction = %poly.construction, counts = ?poly.el_counts(), "built");
    Ok(poly)
}

/// A connected polyhedron in `R^3` from its edge and face lists.
fn polyhedron(
    vertices: Vec<Point>,
    edges: ElementList,
    faces: ElementList,
    construction: Construction,
) -> Result<Polytope> {
    let top = vec![(0..faces.len()).collect()];
    assemble(3, 3, vertices, vec![edges, faces, top], construction)
}

//! N-ary products, reduced right to left: `f(a, b, c) = f(a, f(b, c))`.
//!
//! Operands are validated once up front; the partial results are built by the
//! engine and need no re-validation. Construction descriptors flatten, so the
//! result of `prism_all([a, b, c])` records `Prism([a, b, c])`.

use super::engine::{prism_valid, pyramid_valid, tegum_valid};
use crate::cfg::ProductCfg;
use crate::error::Result;
use crate::model::Polytope;

fn reduce(
    polys: Vec<Polytope>,
    empty: fn() -> Polytope,
    step: impl Fn(Polytope, Polytope) -> Polytope,
) -> Result<Polytope> {
    for p in &polys {
        p.validate()?;
    }
    let mut rest = polys.into_iter().rev();
    let Some(mut acc) = rest.next() else {
        return Ok(empty());
    };
    for p in rest {
        acc = step(p, acc);
    }
    Ok(acc)
}

/// Prism of all operands; the empty product is the point.
pub fn prism_all(polys: Vec<Polytope>) -> Result<Polytope> {
    reduce(polys, Polytope::point, prism_valid)
}

/// Tegum of all operands; the empty tegum is the nullitope.
pub fn tegum_all(polys: Vec<Polytope>) -> Result<Polytope> {
    reduce(polys, Polytope::nullitope, tegum_valid)
}

/// Pyramid of all operands with the given apex height at every step; the
/// empty pyramid is the nullitope.
pub fn pyramid_all(polys: Vec<Polytope>, cfg: ProductCfg) -> Result<Polytope> {
    reduce(polys, Polytope::nullitope, |p, q| pyramid_valid(p, q, cfg))
}

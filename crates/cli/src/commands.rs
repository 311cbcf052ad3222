//! Command bodies behind the CLI: file I/O and dispatch into the library.

use anyhow::{Context, Result};
use polyrank::api::*;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Primitive families reachable from `polyrank build`.
#[derive(Clone, Copy, Debug)]
pub enum Family {
    Point,
    Dyad,
    Hypercube(usize),
    Simplex(usize),
    Cross(usize),
    Polygon { n: usize, d: usize, edge: f64 },
    Antiprism { n: usize, d: usize },
    Cupola { n: usize, d: usize },
    Cuploid { n: usize, d: usize },
    Blend { n: usize, d: usize },
}

#[derive(Clone, Copy, Debug)]
pub enum ProductKind {
    Prism,
    Tegum,
    Pyramid,
}

pub fn build(family: Family) -> Result<Polytope> {
    tracing::info!(?family, "build");
    let poly = match family {
        Family::Point => Polytope::point(),
        Family::Dyad => Polytope::dyad(),
        Family::Hypercube(d) => hypercube(d)?,
        Family::Simplex(d) => simplex(d)?,
        Family::Cross(d) => cross(d)?,
        Family::Polygon { n, d, edge } => polygon_with(n, d, BuildCfg { edge_len: edge })?,
        Family::Antiprism { n, d } => antiprism(n, d)?,
        Family::Cupola { n, d } => cupola(n, d)?,
        Family::Cuploid { n, d } => cuploid(n, d)?,
        Family::Blend { n, d } => cupolaic_blend(n, d)?,
    };
    Ok(poly)
}

pub fn read_polytope(path: &Path) -> Result<Polytope> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let poly = from_json(&text).with_context(|| format!("decoding {}", path.display()))?;
    Ok(poly)
}

fn read_all(paths: &[impl AsRef<Path>]) -> Result<Vec<Polytope>> {
    paths.iter().map(|p| read_polytope(p.as_ref())).collect()
}

pub fn product(kind: ProductKind, height: f64, inputs: &[impl AsRef<Path>]) -> Result<Polytope> {
    tracing::info!(?kind, operands = inputs.len(), "product");
    let polys = read_all(inputs)?;
    let poly = match kind {
        ProductKind::Prism => prism_all(polys),
        ProductKind::Tegum => tegum_all(polys),
        ProductKind::Pyramid => pyramid_all(
            polys,
            ProductCfg {
                pyramid_height: height,
            },
        ),
    }
    .with_context(|| format!("{kind:?} product"))?;
    Ok(poly)
}

pub fn compound(inputs: &[impl AsRef<Path>]) -> Result<Polytope> {
    let polys = read_all(inputs)?;
    Ok(polyrank::api::compound(polys).context("compound")?)
}

/// Writes the polytope's JSON to `out`, creating parent directories, or to
/// stdout when no path is given.
pub fn emit(poly: &Polytope, out: Option<&Path>) -> Result<()> {
    let text = to_json(poly)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(out = %path.display(), counts = ?poly.el_counts(), "wrote");
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[derive(Serialize)]
struct Info {
    rank: isize,
    dim: usize,
    counts: Vec<usize>,
    components: usize,
    construction: String,
}

/// Summary printed by `polyrank info`.
pub fn info(poly: &Polytope) -> Result<Value> {
    let summary = Info {
        rank: poly.rank(),
        dim: poly.dim(),
        counts: poly.el_counts(),
        components: poly.components().len(),
        construction: poly.construction().to_string(),
    };
    Ok(serde_json::to_value(summary)?)
}

//! Bit-pattern builders: hypercube, simplex, cross-polytope.
//!
//! Each cell is named by a bit pattern and its facets are found by removing one
//! bit. Iterating patterns in ascending order guarantees every facet pattern
//! (numerically smaller) was emitted first; the flat location tables make that
//! ordering checkable, and a miss is reported as `PolyError::FacetOrder`.

use std::f64::consts::FRAC_1_SQRT_2;

use super::assemble;
use crate::cfg::MAX_BIT_RANK;
use crate::construction::Construction;
use crate::error::{PolyError, Result};
use crate::model::{ElementList, Polytope};
use crate::point::Point;

/// Single-bit masks of `x`, lowest first.
fn bits(x: usize) -> impl Iterator<Item = usize> {
    (0..usize::BITS).map(|b| 1usize << b).filter(move |&b| x & b != 0)
}

fn check_rank(kind: &str, d: usize) -> Result<()> {
    if d > MAX_BIT_RANK {
        return Err(PolyError::Unsupported(format!(
            "{kind} of rank {d} exceeds the bit-table limit {MAX_BIT_RANK}"
        )));
    }
    Ok(())
}

fn locate(table: &[Option<usize>], slot: usize, rank: usize, pattern: usize) -> Result<usize> {
    table[slot].ok_or(PolyError::FacetOrder { rank, pattern })
}

/// The `d`-cube `[-1/2, 1/2]^d`.
///
/// Cells are pairs `(i, j)` with `i & j == 0`: `i` marks the free axes, `j` the
/// fixed axes sitting at `+1/2`. The location table is indexed by
/// `(i << d) | j`.
pub fn hypercube(d: usize) -> Result<Polytope> {
    check_rank("hypercube", d)?;
    let full = 1usize << d;
    let mut loc: Vec<Option<usize>> = vec![None; full * full];
    let mut vertices = Vec::with_capacity(full);
    let mut ranks: Vec<ElementList> = vec![Vec::new(); d];
    for i in 0..full {
        let rank = i.count_ones() as usize;
        for j in (0..full).filter(|&j| i & j == 0) {
            let idx = if rank == 0 {
                let coords = (0..d)
                    .map(|b| if (j >> b) & 1 == 1 { 0.5 } else { -0.5 })
                    .collect();
                vertices.push(Point::new(coords));
                vertices.len() - 1
            } else {
                let mut subs = Vec::with_capacity(2 * rank);
                for b in bits(i) {
                    let rest = i ^ b;
                    subs.push(locate(&loc, (rest << d) | j, rank - 1, rest)?);
                    subs.push(locate(&loc, (rest << d) | j | b, rank - 1, rest)?);
                }
                ranks[rank - 1].push(subs);
                ranks[rank - 1].len() - 1
            };
            loc[(i << d) | j] = Some(idx);
        }
    }
    assemble(d, d, vertices, ranks, Construction::Hypercube(d))
}

/// Regular `d`-simplex with unit edges, centred at the origin.
///
/// Vertex `i` has coordinate `-a_k` on axis `k` if `i < k`, `k·a_k` if `i == k`
/// and `0` otherwise, with `a_k = 1/sqrt(2k(k+1))`. Cells are the nonempty
/// vertex masks.
pub fn simplex(d: usize) -> Result<Polytope> {
    check_rank("simplex", d)?;
    let n = d + 1;
    // a[k - 1] = a_k, built once and shared by all vertices.
    let a: Vec<f64> = (1..=d)
        .map(|k| 1.0 / ((2 * k * (k + 1)) as f64).sqrt())
        .collect();
    let vertices: Vec<Point> = (0..n)
        .map(|i| {
            let coords = (1..=d)
                .map(|k| match i.cmp(&k) {
                    std::cmp::Ordering::Less => -a[k - 1],
                    std::cmp::Ordering::Equal => k as f64 * a[k - 1],
                    std::cmp::Ordering::Greater => 0.0,
                })
                .collect();
            Point::new(coords)
        })
        .collect();

    let full = 1usize << n;
    let mut loc: Vec<Option<usize>> = vec![None; full];
    let mut ranks: Vec<ElementList> = vec![Vec::new(); d];
    for mask in 1..full {
        let rank = mask.count_ones() as usize - 1;
        let idx = if rank == 0 {
            mask.trailing_zeros() as usize
        } else {
            let subs = bits(mask)
                .map(|b| locate(&loc, mask ^ b, rank - 1, mask ^ b))
                .collect::<Result<Vec<_>>>()?;
            ranks[rank - 1].push(subs);
            ranks[rank - 1].len() - 1
        };
        loc[mask] = Some(idx);
    }
    assemble(d, d, vertices, ranks, Construction::Simplex(d))
}

/// Regular `d`-orthoplex with vertices `±1/√2` on every axis.
///
/// Cells of rank `popcount(a) - 1` are pairs `(a, s)`: the axis mask `a` and the
/// mask `s ⊆ a` of axes on their negative side. The top cell is synthesized as
/// the set of all facets. `cross(0)` is the point.
pub fn cross(d: usize) -> Result<Polytope> {
    check_rank("cross-polytope", d)?;
    if d == 0 {
        return Ok(Polytope::point().with_construction(Construction::Orthoplex(0)));
    }
    let full = 1usize << d;
    let mut loc: Vec<Option<usize>> = vec![None; full * full];
    let mut vertices = Vec::with_capacity(2 * d);
    // Ranks 1..d-1; the top is appended afterwards.
    let mut ranks: Vec<ElementList> = vec![Vec::new(); d - 1];
    for a in 1..full {
        let rank = a.count_ones() as usize - 1;
        for s in (0..full).filter(|&s| s & !a == 0) {
            let idx = if rank == 0 {
                let axis = a.trailing_zeros() as usize;
                let mut coords = vec![0.0; d];
                coords[axis] = if s == 0 { FRAC_1_SQRT_2 } else { -FRAC_1_SQRT_2 };
                vertices.push(Point::new(coords));
                vertices.len() - 1
            } else {
                let subs = bits(a)
                    .map(|b| locate(&loc, ((a ^ b) << d) | (s & !b), rank - 1, a ^ b))
                    .collect::<Result<Vec<_>>>()?;
                ranks[rank - 1].push(subs);
                ranks[rank - 1].len() - 1
            };
            loc[(a << d) | s] = Some(idx);
        }
    }
    let facets = match ranks.last() {
        Some(list) => list.len(),
        None => vertices.len(),
    };
    ranks.push(vec![(0..facets).collect()]);
    assemble(d, d, vertices, ranks, Construction::Orthoplex(d))
}

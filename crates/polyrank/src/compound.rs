//! Compounds: disjoint unions of polytopes of the same rank.

use crate::construction::ListKind;
use crate::error::{PolyError, Result};
use crate::model::{ElementList, Polytope};

/// Joins same-rank polytopes into one whose components are the parts'
/// components, in order. Vertices are zero-padded on the right up to the
/// widest ambient dimension; every index is shifted past the earlier parts.
pub fn compound(parts: Vec<Polytope>) -> Result<Polytope> {
    let Some(first) = parts.first() else {
        return Err(PolyError::InvalidParameters(
            "compound of no polytopes".into(),
        ));
    };
    let rank = first.rank();
    for p in &parts {
        p.validate()?;
        if p.rank() != rank {
            return Err(PolyError::RankMismatch(format!(
                "compound mixes rank {rank} with rank {}",
                p.rank()
            )));
        }
    }
    if parts.len() == 1 {
        return Ok(parts.into_iter().next().unwrap_or_else(Polytope::nullitope));
    }
    if rank < 2 {
        // A rank-1 component is its vertex set; disjoint dyads would need
        // components the detector cannot recover from the vertices alone.
        return Err(PolyError::Unsupported(format!(
            "a compound of rank {rank} polytopes has no components to join"
        )));
    }

    let d = rank as usize;
    let dim = parts.iter().map(Polytope::dim).max().unwrap_or(0);
    let mut vertices = Vec::new();
    let mut ranks: Vec<ElementList> = vec![Vec::new(); d];
    let mut descriptors = Vec::with_capacity(parts.len());
    for p in parts {
        // Offsets are the current sizes of the rank below, before this part.
        let mut below = vertices.len();
        vertices.extend(p.vertices().iter().map(|v| v.pad_right(dim - v.dim())));
        for k in 1..=d {
            let next = ranks[k - 1].len();
            let shifted = p.ranks[k - 1]
                .iter()
                .map(|subs| subs.iter().map(|&s| s + below).collect());
            ranks[k - 1].extend(shifted);
            below = next;
        }
        descriptors.push(p.construction);
    }
    let poly = Polytope {
        rank,
        dim,
        vertices,
        ranks,
        construction: ListKind::Compound.merge(descriptors),
    };
    tracing::debug!(construction = %poly.construction, counts = ?poly.el_counts(), "compound");
    Ok(poly)
}

//! Derived accessors for renderers: vertex sets and vertex cycles of elements.

use std::collections::BTreeSet;

use super::Polytope;
use crate::error::{PolyError, Result};

impl Polytope {
    /// Sorted vertex indices under an element of rank `k >= 1`.
    pub fn element_vertices(&self, rank: usize, index: usize) -> Option<Vec<usize>> {
        let mut current: BTreeSet<usize> = self.subs(rank, index)?.iter().copied().collect();
        for r in (1..rank).rev() {
            let mut next = BTreeSet::new();
            for &i in &current {
                next.extend(self.subs(r, i)?.iter().copied());
            }
            current = next;
        }
        Some(current.into_iter().collect())
    }

    /// Ordered vertex indices bounding a 2-cell, obtained by chaining its edges.
    ///
    /// The cycle starts at the first vertex of the face's first edge and does
    /// not repeat the start at the end.
    pub fn face_vertex_cycle(&self, face: usize) -> Result<Vec<usize>> {
        let edges = self.subs(2, face).ok_or(PolyError::NoSuchElement {
            rank: 2,
            index: face,
        })?;
        let mut ends = Vec::with_capacity(edges.len());
        for &e in edges {
            match self.subs(1, e) {
                Some(&[a, b]) => ends.push((a, b)),
                _ => return Err(PolyError::NotACycle { face }),
            }
        }
        let Some(&(start, first)) = ends.first() else {
            return Err(PolyError::NotACycle { face });
        };
        let mut used = vec![false; ends.len()];
        used[0] = true;
        let mut cycle = vec![start];
        let mut cur = first;
        for _ in 1..ends.len() {
            cycle.push(cur);
            let next = (0..ends.len()).find(|&k| !used[k] && (ends[k].0 == cur || ends[k].1 == cur));
            let Some(k) = next else {
                return Err(PolyError::NotACycle { face });
            };
            used[k] = true;
            cur = if ends[k].0 == cur { ends[k].1 } else { ends[k].0 };
        }
        if cur != start {
            return Err(PolyError::NotACycle { face });
        }
        Ok(cycle)
    }
}

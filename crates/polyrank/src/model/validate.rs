//! Structural validation of the ranked element model.

use super::Polytope;
use crate::error::{PolyError, Result};

impl Polytope {
    /// Checks every invariant of the model; reports the first broken reference
    /// with its rank and index.
    pub fn validate(&self) -> Result<()> {
        self.validate_up_to(self.rank)?;
        self.validate_partition()
    }

    /// Shape checks plus reference checks for ranks `1..=max_rank`.
    pub(crate) fn validate_up_to(&self, max_rank: isize) -> Result<()> {
        self.validate_shape()?;
        for (i, v) in self.vertices.iter().enumerate() {
            if v.dim() != self.dim {
                return Err(PolyError::DimensionMismatch {
                    vertex: i,
                    expected: self.dim,
                    found: v.dim(),
                });
            }
        }
        let top = max_rank.min(self.rank);
        // Presence map sized to the largest rank, reset after each element.
        let widest = (0..top).map(|r| self.el_count(r)).max().unwrap_or(0);
        let mut seen = vec![false; widest];
        for rank in 1..=top.max(0) as usize {
            let below = self.el_count(rank as isize - 1);
            for (element, subs) in self.ranks[rank - 1].iter().enumerate() {
                if subs.is_empty() {
                    return Err(PolyError::EmptyElement { rank, element });
                }
                let mut result = Ok(());
                for &sub in subs {
                    if sub >= below {
                        result = Err(PolyError::DanglingSubelement {
                            rank,
                            element,
                            sub,
                            len: below,
                        });
                        break;
                    }
                    if seen[sub] {
                        result = Err(PolyError::DuplicateSubelement { rank, element, sub });
                        break;
                    }
                    seen[sub] = true;
                }
                for &sub in subs {
                    if sub < below {
                        seen[sub] = false;
                    }
                }
                result?;
            }
        }
        Ok(())
    }

    /// The components must cover every facet exactly once.
    fn validate_partition(&self) -> Result<()> {
        if self.rank < 1 {
            return Ok(());
        }
        let comps = self.components();
        if comps.is_empty() {
            return Err(PolyError::RankMismatch(format!(
                "rank {} polytope has no components",
                self.rank
            )));
        }
        if self.rank == 1 && comps.len() > 1 {
            return Err(PolyError::RankMismatch(format!(
                "rank 1 polytope has {} components, expected 1",
                comps.len()
            )));
        }
        let mut hits = vec![0usize; self.el_count(self.rank - 1)];
        for comp in comps {
            for &f in comp {
                hits[f] += 1;
            }
        }
        match hits.iter().position(|&h| h != 1) {
            Some(facet) => Err(PolyError::RankMismatch(format!(
                "facet {facet} lies in {} components, expected exactly 1",
                hits[facet]
            ))),
            None => Ok(()),
        }
    }

    fn validate_shape(&self) -> Result<()> {
        let expected_ranks = self.rank.max(0) as usize;
        if self.ranks.len() != expected_ranks {
            return Err(PolyError::RankMismatch(format!(
                "rank {} polytope stores {} element ranks, expected {expected_ranks}",
                self.rank,
                self.ranks.len()
            )));
        }
        match self.rank {
            r if r < -1 => Err(PolyError::RankMismatch(format!("rank {r} is below -1"))),
            -1 if !self.vertices.is_empty() => Err(PolyError::RankMismatch(
                "nullitope cannot have vertices".into(),
            )),
            0 if self.vertices.len() != 1 => Err(PolyError::RankMismatch(format!(
                "a point has exactly one vertex, got {}",
                self.vertices.len()
            ))),
            r if r >= 1 && self.vertices.is_empty() => Err(PolyError::RankMismatch(format!(
                "rank {r} polytope has no vertices"
            ))),
            _ => Ok(()),
        }
    }
}

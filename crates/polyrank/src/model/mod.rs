//! Ranked Element Model: polytopes as lists of index sets, one list per rank.
//!
//! Purpose
//! - Store a rank-`d` polytope as vertices (rank 0), elements of ranks
//!   `1..d-1` (each a set of indices into the rank below), and the components
//!   (rank `d`), which partition the facets into connected pieces.
//! - Keep the nullitope (rank −1) and the point (rank 0) as sentinel shapes of
//!   the same struct rather than special entries in the rank lists.
//!
//! Why this design (short)
//! - Plain `Vec<Vec<usize>>` per rank: dense indices, cheap to copy between
//!   products, trivially serializable.
//! - Validation is an explicit pass (`validate`) run at every boundary that
//!   first consumes foreign data: `from_parts`, codec import, product entry.
//!
//! Invariants
//! - `ranks.len() == max(rank, 0)`; `ranks[k - 1]` holds rank `k`.
//! - Every subelement index is `< el_count(k - 1)`; no duplicates per element.
//! - All vertices have exactly `dim` coordinates.

mod extrude;
mod faces;
mod relabel;
mod validate;


use crate::connectivity::facet_components;
use crate::construction::Construction;
use crate::error::{PolyError, Result};
use crate::point::Point;

/// Facet indices of one element, pointing into the rank below.
pub type Element = Vec<usize>;
/// All elements of one rank.
pub type ElementList = Vec<Element>;

/// A concrete polytope: abstract ranks plus vertex coordinates.
#[derive(Clone, Debug)]
pub struct Polytope {
    pub(crate) rank: isize,
    pub(crate) dim: usize,
    pub(crate) vertices: Vec<Point>,
    pub(crate) ranks: Vec<ElementList>,
    pub(crate) construction: Construction,
}

impl Polytope {
    /// The rank −1 polytope: no vertices, no elements.
    pub fn nullitope() -> Self {
        Self {
            rank: -1,
            dim: 0,
            vertices: Vec::new(),
            ranks: Vec::new(),
            construction: Construction::Nullitope,
        }
    }

    /// A single vertex at the origin of `R^0`.
    pub fn point() -> Self {
        Self::point_at(Point::origin(0))
    }

    /// A single vertex at `p`.
    pub fn point_at(p: Point) -> Self {
        Self {
            rank: 0,
            dim: p.dim(),
            vertices: vec![p],
            ranks: Vec::new(),
            construction: Construction::Point,
        }
    }

    /// Unit segment centred at the origin of `R^1`.
    pub fn dyad() -> Self {
        Self {
            rank: 1,
            dim: 1,
            vertices: vec![Point::new(vec![-0.5]), Point::new(vec![0.5])],
            ranks: vec![vec![vec![0, 1]]],
            construction: Construction::Dyad,
        }
    }

    /// Assembles and validates a polytope from its serialized parts.
    ///
    /// `elements` holds ranks `1..rank-1`; `components` holds rank `rank` and is
    /// recomputed with the connectivity detector when `None`.
    pub fn from_parts(
        rank: isize,
        dim: usize,
        vertices: Vec<Point>,
        elements: Vec<ElementList>,
        components: Option<ElementList>,
        construction: Construction,
    ) -> Result<Self> {
        if rank < -1 {
            return Err(PolyError::RankMismatch(format!("rank {rank} is below -1")));
        }
        let proper = (rank - 1).max(0) as usize;
        if elements.len() != proper {
            return Err(PolyError::RankMismatch(format!(
                "rank {rank} polytope needs {proper} element ranks, got {}",
                elements.len()
            )));
        }
        let mut ranks = elements;
        let known = components.is_some();
        if rank >= 1 {
            ranks.push(components.unwrap_or_default());
        } else if components.map_or(false, |c| !c.is_empty()) {
            return Err(PolyError::RankMismatch(format!(
                "rank {rank} polytope cannot carry components"
            )));
        }
        let mut poly = Self {
            rank,
            dim,
            vertices,
            ranks,
            construction,
        };
        if rank >= 1 && !known {
            // Components are recomputed below; validate the lower ranks first so
            // the detector only sees in-range indices.
            poly.validate_up_to(rank - 1)?;
            poly.recompute_components()?;
        }
        poly.validate()?;
        Ok(poly)
    }

    /// Intrinsic rank; −1 for the nullitope.
    #[inline]
    pub fn rank(&self) -> isize {
        self.rank
    }

    /// Ambient (coordinate) dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn construction(&self) -> &Construction {
        &self.construction
    }

    /// Replaces the construction descriptor.
    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Number of elements of a rank. Rank −1 always has the single nullitope
    /// element; ranks outside `-1..=rank` have none.
    pub fn el_count(&self, rank: isize) -> usize {
        match rank {
            r if r < -1 || r > self.rank => 0,
            -1 => 1,
            0 => self.vertices.len(),
            r => self.ranks[r as usize - 1].len(),
        }
    }

    /// Element counts of ranks `0..=rank` (empty for the nullitope).
    pub fn el_counts(&self) -> Vec<usize> {
        (0..=self.rank).map(|r| self.el_count(r)).collect()
    }

    /// Elements of rank `k >= 1`; the top rank returns the components.
    pub fn elements(&self, rank: usize) -> Option<&ElementList> {
        rank.checked_sub(1).and_then(|i| self.ranks.get(i))
    }

    /// The top-rank components (empty below rank 1).
    pub fn components(&self) -> &[Element] {
        match self.rank {
            r if r >= 1 => &self.ranks[r as usize - 1],
            _ => &[],
        }
    }

    /// True when the facets split into more than one connected piece.
    pub fn is_compound(&self) -> bool {
        self.components().len() > 1
    }

    /// Facets of one element of rank `k >= 1`.
    pub fn subs(&self, rank: usize, index: usize) -> Option<&[usize]> {
        self.elements(rank)?.get(index).map(Vec::as_slice)
    }

    /// Rebuilds the top rank from the facets with the connectivity detector.
    pub fn recompute_components(&mut self) -> Result<()> {
        match self.rank {
            r if r < 1 => Ok(()),
            1 => {
                self.ranks[0] = vec![(0..self.vertices.len()).collect()];
                Ok(())
            }
            r => {
                let top = r as usize;
                let sub_count = self.el_count(r - 2);
                let comps = facet_components(&self.ranks[top - 2], top - 1, sub_count)?;
                self.ranks[top - 1] = comps;
                Ok(())
            }
        }
    }

    /// Splits the polytope into its owned parts `(vertices, ranks, construction)`.
    pub fn into_parts(self) -> (Vec<Point>, Vec<ElementList>, Construction) {
        (self.vertices, self.ranks, self.construction)
    }
}

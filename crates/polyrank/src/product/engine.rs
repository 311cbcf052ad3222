//! Shared rank-pair walker and the two-operand products.

use super::index::RankPairTable;
use crate::cfg::ProductCfg;
use crate::construction::{Construction, ListKind};
use crate::error::Result;
use crate::model::{Element, ElementList, Polytope};
use crate::point::Point;

/// Facets of a vertex when the nullitope counts as a rank: the single rank −1
/// element.
const NULL_FACET: &[usize] = &[0];

/// Which product is being formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Prism,
    Tegum,
    Pyramid,
}

impl Kind {
    /// Lowest operand rank taking part in cells.
    fn lo(self) -> isize {
        match self {
            Kind::Prism => 0,
            Kind::Tegum | Kind::Pyramid => -1,
        }
    }

    /// Highest operand rank taking part in cells; the tegum stops below the
    /// components and pairs them in a separate pass.
    fn hi(self, rank: isize) -> isize {
        match self {
            Kind::Tegum => rank - 1,
            Kind::Prism | Kind::Pyramid => rank,
        }
    }

    /// Result rank of cell `(m, n)` is `m + n + shift`.
    fn shift(self) -> isize {
        match self {
            Kind::Prism => 0,
            Kind::Tegum | Kind::Pyramid => 1,
        }
    }

    fn list_kind(self) -> ListKind {
        match self {
            Kind::Prism => ListKind::Prism,
            Kind::Tegum => ListKind::Tegum,
            Kind::Pyramid => ListKind::Pyramid,
        }
    }
}

/// Facets of P's rank-`m` element `i` as seen by a product whose window
/// starts at `lo`.
fn facets_of<'a>(poly: &'a Polytope, lo: isize, m: isize, i: usize) -> &'a [usize] {
    match m {
        m if m <= lo => &[],
        0 => NULL_FACET,
        m => poly.subs(m as usize, i).unwrap_or(&[]),
    }
}

fn counts(poly: &Polytope, lo: isize, hi: isize) -> Vec<usize> {
    (lo..=hi).map(|r| poly.el_count(r)).collect()
}

/// Walks every rank-pair diagonal and returns the vertex cells and the element
/// lists of result ranks `1..=top`, where `top` is the last diagonal.
fn walk(
    kind: Kind,
    p: &Polytope,
    q: &Polytope,
    place: impl Fn(isize, usize, isize, usize) -> Point,
) -> (RankPairTable, Vec<Point>, Vec<ElementList>) {
    let lo = kind.lo();
    let (p_hi, q_hi) = (kind.hi(p.rank()), kind.hi(q.rank()));
    let table = RankPairTable::new(lo, counts(p, lo, p_hi), lo, counts(q, lo, q_hi));
    let shift = kind.shift();

    let mut vertices = Vec::with_capacity(table.diagonal_len(-shift));
    for m in table.diagonal(-shift) {
        let n = -shift - m;
        for i in 0..table.p_count(m) {
            for j in 0..table.q_count(n) {
                vertices.push(place(m, i, n, j));
            }
        }
    }

    let mut ranks = Vec::new();
    for r in 1..=(p_hi + q_hi + shift) {
        let s = r - shift;
        let mut cells = ElementList::with_capacity(table.diagonal_len(s));
        for m in table.diagonal(s) {
            let n = s - m;
            for i in 0..table.p_count(m) {
                let p_facets = facets_of(p, lo, m, i);
                for j in 0..table.q_count(n) {
                    let q_facets = facets_of(q, lo, n, j);
                    let mut cell = Element::with_capacity(p_facets.len() + q_facets.len());
                    cell.extend(p_facets.iter().map(|&f| table.index(m - 1, f, n, j)));
                    cell.extend(q_facets.iter().map(|&g| table.index(m, i, n - 1, g)));
                    cells.push(cell);
                }
            }
        }
        ranks.push(cells);
    }
    (table, vertices, ranks)
}

fn finish(
    kind: Kind,
    rank: isize,
    dim: usize,
    vertices: Vec<Point>,
    ranks: Vec<ElementList>,
    parts: [Construction; 2],
) -> Polytope {
    let poly = Polytope {
        rank,
        dim,
        vertices,
        ranks,
        construction: kind.list_kind().merge(parts),
    };
    tracing::debug!(construction = %poly.construction, counts = ?poly.el_counts(), "product");
    poly
}

/// Re-embeds every vertex of `poly` through `f` into `R^dim`.
fn embed(mut poly: Polytope, dim: usize, f: impl Fn(&Point) -> Point) -> Polytope {
    poly.vertices = poly.vertices.iter().map(f).collect();
    poly.dim = dim;
    poly
}

/// Cartesian product `P × Q`.
///
/// Vertices are all pairs `(p, q)` with `p` outer; a cell of rank `m + n`
/// exists for every rank-`m` element of P and rank-`n` element of Q, its
/// facets given by the Leibniz rule. The point is the identity (its
/// coordinates are prepended or appended) and the nullitope absorbs.
pub fn prism(p: Polytope, q: Polytope) -> Result<Polytope> {
    p.validate()?;
    q.validate()?;
    Ok(prism_valid(p, q))
}

pub(crate) fn prism_valid(p: Polytope, q: Polytope) -> Polytope {
    if p.rank() < 0 || q.rank() < 0 {
        return Polytope::nullitope();
    }
    let dim = p.dim() + q.dim();
    if p.rank() == 0 {
        let origin = p.vertices()[0].clone();
        return embed(q, dim, |v| origin.product(v));
    }
    if q.rank() == 0 {
        let origin = q.vertices()[0].clone();
        return embed(p, dim, |v| v.product(&origin));
    }
    let (_, vertices, ranks) = walk(Kind::Prism, &p, &q, |_, i, _, j| {
        p.vertices()[i].product(&q.vertices()[j])
    });
    finish(
        Kind::Prism,
        p.rank() + q.rank(),
        dim,
        vertices,
        ranks,
        [p.construction, q.construction],
    )
}

/// Direct sum (tegum) `P ⊕ Q`.
///
/// Q's vertices come first, zero-padded on the left by `dim P`, then P's,
/// zero-padded on the right by `dim Q`. Proper elements pair by the
/// rank-shifted Leibniz rule with the nullitope as identity; the components
/// are the pairs of operand components, each holding every pair of their
/// facets. The nullitope and the point are identities.
pub fn tegum(p: Polytope, q: Polytope) -> Result<Polytope> {
    p.validate()?;
    q.validate()?;
    Ok(tegum_valid(p, q))
}

pub(crate) fn tegum_valid(p: Polytope, q: Polytope) -> Polytope {
    if p.rank() < 0 {
        return q;
    }
    if q.rank() < 0 {
        return p;
    }
    let dim = p.dim() + q.dim();
    let (pd, qd) = (p.dim(), q.dim());
    if p.rank() == 0 {
        return embed(q, dim, |v| v.pad_left(pd));
    }
    if q.rank() == 0 {
        return embed(p, dim, |v| v.pad_right(qd));
    }
    let (table, vertices, mut ranks) = walk(Kind::Tegum, &p, &q, |m, i, _, j| {
        if m < 0 {
            q.vertices()[j].pad_left(pd)
        } else {
            p.vertices()[i].pad_right(qd)
        }
    });
    let (m, n) = (p.rank() - 1, q.rank() - 1);
    let mut top = ElementList::with_capacity(p.components().len() * q.components().len());
    for cp in p.components() {
        for cq in q.components() {
            let mut comp = Element::with_capacity(cp.len() * cq.len());
            for &f in cp {
                comp.extend(cq.iter().map(|&g| table.index(m, f, n, g)));
            }
            top.push(comp);
        }
    }
    ranks.push(top);
    finish(
        Kind::Tegum,
        p.rank() + q.rank(),
        dim,
        vertices,
        ranks,
        [p.construction, q.construction],
    )
}

/// Pyramid product (join) with the default apex height.
pub fn pyramid(p: Polytope, q: Polytope) -> Result<Polytope> {
    pyramid_with(p, q, ProductCfg::default())
}

/// Pyramid product (join) `P ∨ Q` of rank `dP + dQ + 1`.
///
/// Uses the tegum rule including the components, so every element of P is
/// joined with every element of Q. Vertices are laid out as in the tegum and
/// gain one trailing axis: Q sits at `+h/2`, P at `−h/2`. The nullitope is the
/// identity.
pub fn pyramid_with(p: Polytope, q: Polytope, cfg: ProductCfg) -> Result<Polytope> {
    p.validate()?;
    q.validate()?;
    Ok(pyramid_valid(p, q, cfg))
}

pub(crate) fn pyramid_valid(p: Polytope, q: Polytope, cfg: ProductCfg) -> Polytope {
    if p.rank() < 0 {
        return q;
    }
    if q.rank() < 0 {
        return p;
    }
    let (pd, qd) = (p.dim(), q.dim());
    let half = cfg.pyramid_height / 2.0;
    let (_, vertices, ranks) = walk(Kind::Pyramid, &p, &q, |m, i, _, j| {
        if m < 0 {
            q.vertices()[j].pad_left(pd).add_coordinate(half)
        } else {
            p.vertices()[i].pad_right(qd).add_coordinate(-half)
        }
    });
    finish(
        Kind::Pyramid,
        p.rank() + q.rank() + 1,
        pd + qd + 1,
        vertices,
        ranks,
        [p.construction, q.construction],
    )
}

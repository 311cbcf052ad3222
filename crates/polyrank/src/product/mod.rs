//! Product Engine: prism, tegum and pyramid products of ranked polytopes.
//!
//! Purpose
//! - Combine two ranked element models into a third whose cells are pairs of
//!   operand cells, with facets given by the (possibly rank-shifted) Leibniz
//!   rule, and place the result's vertices in the joint coordinate space.
//!
//! Why this design
//! - One engine walks `(rank_p, rank_q)` pairs diagonal by diagonal; the three
//!   products differ only in the rank window each operand contributes, the
//!   rank shift, the vertex layout and the top-rank pass.
//! - Cell indices are computed, not looked up: a per-call `RankPairTable`
//!   holds the offset of every rank-pair block within its result rank, so a
//!   facet index is `offset + i·|Q_n| + j`.
//!
//! Layout
//! - `index.rs`: rank-pair offset memo.
//! - `engine.rs`: the shared walker and the two-operand products.
//! - `multi.rs`: n-ary right-to-left reductions.
//!
//! Invariants
//! - Operands are validated before any index arithmetic; a malformed operand
//!   fails with the model's structural error.
//! - Degenerate operands (nullitope, point) resolve through identity rules,
//!   never through errors.

mod engine;
mod index;
mod multi;

#[cfg(test)]
mod tests;

pub use engine::{prism, pyramid, pyramid_with, tegum};
pub use multi::{prism_all, pyramid_all, tegum_all};

//! Error taxonomy for the polytope core.
//!
//! Structural errors carry the offending rank and index so callers can point at
//! the exact broken reference. Degenerate inputs (empty operands, identities)
//! are not errors; they resolve through the product identity rules.

/// Errors raised by builders, products, validation and the codec.
#[derive(Debug, thiserror::Error)]
pub enum PolyError {
    /// An element references a subelement outside the rank below.
    #[error("rank {rank} element {element} references subelement {sub}, but the rank below has only {len} elements")]
    DanglingSubelement {
        rank: usize,
        element: usize,
        sub: usize,
        len: usize,
    },

    /// An element lists the same subelement twice.
    #[error("rank {rank} element {element} lists subelement {sub} more than once")]
    DuplicateSubelement {
        rank: usize,
        element: usize,
        sub: usize,
    },

    /// An element of positive rank without subelements.
    #[error("rank {rank} element {element} has no subelements")]
    EmptyElement { rank: usize, element: usize },

    /// A vertex whose coordinate count disagrees with the ambient dimension.
    #[error("vertex {vertex} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        vertex: usize,
        expected: usize,
        found: usize,
    },

    /// Rank bookkeeping does not match the stored data.
    #[error("rank mismatch: {0}")]
    RankMismatch(String),

    /// A bit-pattern builder tried to reference a facet that was not emitted yet.
    #[error("rank {rank} cell {pattern:#b} was referenced before it was emitted")]
    FacetOrder { rank: usize, pattern: usize },

    /// A 2-cell whose edges do not chain into a single vertex cycle.
    #[error("face {face} is not a single closed vertex cycle")]
    NotACycle { face: usize },

    /// Lookup of an element that does not exist.
    #[error("no element {index} at rank {rank}")]
    NoSuchElement { rank: isize, index: usize },

    /// Construction parameters outside an analytically solved case.
    #[error("unsupported configuration: {0}")]
    Unsupported(String),

    /// Caller-supplied parameters that do not describe any polytope.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// JSON encoding or decoding failed.
    #[error("json codec: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = PolyError> = std::result::Result<T, E>;

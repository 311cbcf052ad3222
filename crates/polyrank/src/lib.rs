//! Ranked polytopes: element model, primitive builders and product operators.
//!
//! A polytope is stored rank by rank as lists of index sets, with vertex
//! coordinates at rank 0 and the connected components at the top rank.
//! Builders produce the classical families; the product engine combines
//! polytopes by prism, tegum and pyramid products; the connectivity detector
//! recovers components whenever they are not known up front.
//!
//! API Policy
//! - `api` is the curated surface the CLI and benches import from; module
//!   paths below it may move.
//! - The library does no I/O; file access lives in the CLI.

pub mod api;
pub mod builders;
pub mod cfg;
pub mod codec;
pub mod compound;
pub mod connectivity;
pub mod construction;
pub mod error;
pub mod model;
pub mod point;
pub mod product;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use construction::Construction;
pub use error::{PolyError, Result};
pub use model::Polytope;
pub use point::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::builders::{cross, hypercube, polygon, simplex};
    pub use crate::cfg::{BuildCfg, ProductCfg};
    pub use crate::product::{prism, pyramid, tegum};
    pub use crate::{Construction, PolyError, Point, Polytope};
}

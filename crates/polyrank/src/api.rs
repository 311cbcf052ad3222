//! Curated API for the CLI, benches and downstream collaborators.
//!
//! Important
//! - Prefer these re-exports over deep module paths; the module layout may
//!   change while this list stays put.

// Model
pub use crate::model::{Element, ElementList, Polytope};
pub use crate::point::Point;
pub use crate::construction::{Construction, ListKind};
pub use crate::error::{PolyError, Result};
pub use crate::cfg::{BuildCfg, ProductCfg, EPS, MAX_BIT_RANK};
// Builders
pub use crate::builders::{
    antiprism, cross, cupola, cupolaic_blend, cuploid, hypercube, polygon, polygon_with, simplex,
};
// Products and compounds
pub use crate::compound::compound;
pub use crate::product::{
    prism, prism_all, pyramid, pyramid_all, pyramid_with, tegum, tegum_all,
};
// Connectivity
pub use crate::connectivity::facet_components;
// Exchange form
pub use crate::codec::{export, from_json, import, to_json, PolytopeFile};

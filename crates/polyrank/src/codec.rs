//! Exchange form of a polytope and its JSON encoding.
//!
//! The file form stores vertices as plain coordinate lists, the element ranks
//! `1..rank-1`, and optionally the components and the construction descriptor.
//! `export` always writes the components; `import` recomputes them when the
//! file leaves them out and validates everything it reads.

use serde::{Deserialize, Serialize};

use crate::construction::Construction;
use crate::error::Result;
use crate::model::{ElementList, Polytope};
use crate::point::Point;

/// Serialization pair of `Polytope`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolytopeFile {
    pub rank: isize,
    pub dim: usize,
    pub vertices: Vec<Vec<f64>>,
    /// Ranks `1..rank-1`, lowest first.
    #[serde(default)]
    pub elements: Vec<ElementList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ElementList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction: Option<Construction>,
}

/// Label given to imported polytopes whose file carries no descriptor.
pub const IMPORTED: &str = "imported";

pub fn export(poly: &Polytope) -> PolytopeFile {
    let proper = (poly.rank() - 1).max(0) as usize;
    let components = (poly.rank() >= 1).then(|| poly.components().to_vec());
    PolytopeFile {
        rank: poly.rank(),
        dim: poly.dim(),
        vertices: poly.vertices().iter().map(Point::to_vec).collect(),
        elements: poly.ranks[..proper].to_vec(),
        components,
        construction: Some(poly.construction().clone()),
    }
}

pub fn import(file: PolytopeFile) -> Result<Polytope> {
    let construction = file
        .construction
        .unwrap_or_else(|| Construction::Named(IMPORTED.into()));
    let poly = Polytope::from_parts(
        file.rank,
        file.dim,
        file.vertices.into_iter().map(Point::new).collect(),
        file.elements,
        file.components,
        construction,
    )?;
    tracing::debug!(counts = ?poly.el_counts(), "imported");
    Ok(poly)
}

/// Pretty-printed JSON of the exchange form.
pub fn to_json(poly: &Polytope) -> Result<String> {
    Ok(serde_json::to_string_pretty(&export(poly))?)
}

pub fn from_json(text: &str) -> Result<Polytope> {
    import(serde_json::from_str(text)?)
}

//! Construction descriptors: how a polytope was built.
//!
//! The naming subsystem turns these into text; the core only records them.
//! Each kind carries exactly its own children: a dimension, an `(n, d)` pair,
//! one sub-descriptor, a list of sub-descriptors, or a raw string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tagged record of a polytope's construction history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum Construction {
    Nullitope,
    Point,
    Dyad,
    Hypercube(usize),
    Simplex(usize),
    Orthoplex(usize),
    Polygon { n: usize, d: usize },
    Antiprism { n: usize, d: usize },
    Cupola { n: usize, d: usize },
    Cuploid { n: usize, d: usize },
    CupolaicBlend { n: usize, d: usize },
    /// Pyramid over a single base, grown in place by extrusion.
    Apex(Box<Construction>),
    Prism(Vec<Construction>),
    Tegum(Vec<Construction>),
    Pyramid(Vec<Construction>),
    Compound(Vec<Construction>),
    /// Free-form label, e.g. a file name supplied by an importer.
    Named(String),
}

/// List-shaped construction kinds produced by n-ary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Prism,
    Tegum,
    Pyramid,
    Compound,
}

impl ListKind {
    pub fn wrap(self, xs: Vec<Construction>) -> Construction {
        match self {
            ListKind::Prism => Construction::Prism(xs),
            ListKind::Tegum => Construction::Tegum(xs),
            ListKind::Pyramid => Construction::Pyramid(xs),
            ListKind::Compound => Construction::Compound(xs),
        }
    }

    /// Children of `c` if it is of this kind, else `c` itself back.
    fn children(self, c: Construction) -> Result<Vec<Construction>, Construction> {
        match (self, c) {
            (ListKind::Prism, Construction::Prism(xs))
            | (ListKind::Tegum, Construction::Tegum(xs))
            | (ListKind::Pyramid, Construction::Pyramid(xs))
            | (ListKind::Compound, Construction::Compound(xs)) => Ok(xs),
            (_, other) => Err(other),
        }
    }

    /// Joins descriptors under this kind, flattening children that are already
    /// of the same kind. Reads the inputs and writes a new list.
    pub fn merge(self, parts: impl IntoIterator<Item = Construction>) -> Construction {
        let mut out = Vec::new();
        for part in parts {
            match self.children(part) {
                Ok(xs) => out.extend(xs),
                Err(other) => out.push(other),
            }
        }
        self.wrap(out)
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, op: &str, xs: &[Construction]) -> fmt::Result {
            write!(f, "(")?;
            for (i, x) in xs.iter().enumerate() {
                if i > 0 {
                    write!(f, " {op} ")?;
                }
                write!(f, "{x}")?;
            }
            write!(f, ")")
        }
        match self {
            Construction::Nullitope => write!(f, "nullitope"),
            Construction::Point => write!(f, "point"),
            Construction::Dyad => write!(f, "dyad"),
            Construction::Hypercube(d) => write!(f, "hypercube[{d}]"),
            Construction::Simplex(d) => write!(f, "simplex[{d}]"),
            Construction::Orthoplex(d) => write!(f, "orthoplex[{d}]"),
            Construction::Polygon { n, d } => write!(f, "{{{n}/{d}}}"),
            Construction::Antiprism { n, d } => write!(f, "antiprism{{{n}/{d}}}"),
            Construction::Cupola { n, d } => write!(f, "cupola{{{n}/{d}}}"),
            Construction::Cuploid { n, d } => write!(f, "cuploid{{{n}/{d}}}"),
            Construction::CupolaicBlend { n, d } => write!(f, "cupolaic-blend{{{n}/{d}}}"),
            Construction::Apex(base) => write!(f, "apex({base})"),
            Construction::Prism(xs) => list(f, "x", xs),
            Construction::Tegum(xs) => list(f, "+", xs),
            Construction::Pyramid(xs) => list(f, "v", xs),
            Construction::Compound(xs) => list(f, "&", xs),
            Construction::Named(s) => write!(f, "{s}"),
        }
    }
}

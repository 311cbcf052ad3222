//! Tolerances, limits and small runtime configuration structs.
//!
//! Policy
//! - Tolerances are fixed constants to avoid “tolerance juggling”; every
//!   trigonometric or coordinate comparison in the crate goes through `EPS`.
//! - Knobs that callers legitimately vary (edge length, pyramid height) live in
//!   `BuildCfg` / `ProductCfg` with `Default` impls.

/// Shared comparison tolerance for coordinates, angles and heights.
pub const EPS: f64 = 1e-9;

/// Largest rank accepted by the bit-pattern builders (hypercube, simplex,
/// cross-polytope). The hypercube location table has `4^d` slots.
pub const MAX_BIT_RANK: usize = 10;

/// Builder configuration.
#[derive(Clone, Copy, Debug)]
pub struct BuildCfg {
    /// Edge length of polygons built with `polygon_with`.
    pub edge_len: f64,
}

impl Default for BuildCfg {
    fn default() -> Self {
        Self { edge_len: 1.0 }
    }
}

/// Product configuration.
#[derive(Clone, Copy, Debug)]
pub struct ProductCfg {
    /// Distance between the two factors along the apex axis of a pyramid
    /// product; each factor sits at `±pyramid_height / 2`.
    pub pyramid_height: f64,
}

impl Default for ProductCfg {
    fn default() -> Self {
        Self {
            pyramid_height: 1.0,
        }
    }
}

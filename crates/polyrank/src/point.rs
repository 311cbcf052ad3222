//! Coordinate points: immutable tuples of reals with embedding helpers.
//!
//! Every operation returns a fresh `Point`; nothing mutates in place, so a
//! point handed to one polytope is never observed changing through another.
//! Products use `product` to embed Cartesian pairs and `pad_left`/`pad_right`
//! to place one factor's vertices into the joint space.

use nalgebra::DVector;

use crate::cfg::EPS;

/// A point in Euclidean space of any dimension (including zero).
#[derive(Clone, Debug, PartialEq)]
pub struct Point(DVector<f64>);

impl Point {
    #[inline]
    pub fn new(coords: Vec<f64>) -> Self {
        Self(DVector::from_vec(coords))
    }

    /// The origin of `R^dim`.
    #[inline]
    pub fn origin(dim: usize) -> Self {
        Self(DVector::zeros(dim))
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn coords(&self) -> &[f64] {
        self.0.as_slice()
    }

    #[inline]
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.iter().copied().collect()
    }

    #[inline]
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.0
    }

    /// Concatenation `(self, other)`.
    pub fn product(&self, other: &Point) -> Point {
        let coords = self.0.iter().chain(other.0.iter()).copied().collect();
        Point::new(coords)
    }

    /// Prepends `n` zero coordinates.
    pub fn pad_left(&self, n: usize) -> Point {
        Point::origin(n).product(self)
    }

    /// Appends `n` zero coordinates.
    pub fn pad_right(&self, n: usize) -> Point {
        self.product(&Point::origin(n))
    }

    /// Appends one coordinate.
    pub fn add_coordinate(&self, x: f64) -> Point {
        self.product(&Point::new(vec![x]))
    }

    /// Per-coordinate equality within `EPS`. Points of different dimension are
    /// never equal.
    pub fn approx_eq(&self, other: &Point) -> bool {
        self.dim() == other.dim()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| (a - b).abs() <= EPS)
    }

    /// Euclidean distance. Panics in debug builds on mismatched dimensions.
    pub fn distance(&self, other: &Point) -> f64 {
        debug_assert_eq!(self.dim(), other.dim());
        (&self.0 - &other.0).norm()
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Point::new(coords)
    }
}

impl std::ops::Index<usize> for Point {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeddings_concatenate_and_pad() {
        let p = Point::new(vec![1.0, 2.0]);
        let q = Point::new(vec![3.0]);
        assert_eq!(p.product(&q).coords(), &[1.0, 2.0, 3.0]);
        assert_eq!(q.pad_left(2).coords(), &[0.0, 0.0, 3.0]);
        assert_eq!(q.pad_right(2).coords(), &[3.0, 0.0, 0.0]);
        assert_eq!(p.add_coordinate(-0.5).coords(), &[1.0, 2.0, -0.5]);
        // Operands are untouched.
        assert_eq!(p.dim(), 2);
        assert_eq!(q.dim(), 1);
    }

    #[test]
    fn approx_eq_respects_tolerance_and_dimension() {
        let a = Point::new(vec![0.0, 1.0]);
        let b = Point::new(vec![1e-12, 1.0 - 1e-12]);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&Point::new(vec![0.0, 1.0 + 1e-6])));
        assert!(!a.approx_eq(&Point::new(vec![0.0, 1.0, 0.0])));
        assert!(Point::origin(0).approx_eq(&Point::new(Vec::new())));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(vec![0.0, 0.0, 0.0]);
        let b = Point::new(vec![1.0, 2.0, 2.0]);
        assert!((a.distance(&b) - 3.0).abs() < 1e-12);
    }
}

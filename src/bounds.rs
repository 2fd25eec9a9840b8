//! Axis-aligned bounds for the candidate space.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lower and upper bounds, one entry per input dimension.
///
/// Validated at construction: both vectors must have the same nonzero
/// length, every entry must be finite, and each lower bound must be
/// strictly below its upper bound.
///
/// # Examples
///
/// ```
/// use acqgen::Bounds;
///
/// let bounds = Bounds::new(vec![0.0, -1.0], vec![1.0, 1.0]).unwrap();
/// assert_eq!(bounds.dim(), 2);
/// assert!(bounds.contains(&[0.5, 0.0]));
/// assert!(!bounds.contains(&[0.5, 2.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    lb: Vec<f64>,
    ub: Vec<f64>,
}

impl Bounds {
    /// Creates validated bounds from lower and upper bound vectors.
    ///
    /// # Errors
    ///
    /// - [`Error::BoundsLengthMismatch`] if the vectors differ in length.
    /// - [`Error::EmptyBounds`] if the vectors are empty.
    /// - [`Error::InvalidBounds`] if any entry is non-finite or a lower
    ///   bound is not strictly below its upper bound.
    pub fn new(lb: Vec<f64>, ub: Vec<f64>) -> Result<Self> {
        if lb.len() != ub.len() {
            return Err(Error::BoundsLengthMismatch {
                lb: lb.len(),
                ub: ub.len(),
            });
        }
        if lb.is_empty() {
            return Err(Error::EmptyBounds);
        }
        for (dim, (&low, &high)) in lb.iter().zip(&ub).enumerate() {
            if !low.is_finite() || !high.is_finite() || low >= high {
                return Err(Error::InvalidBounds { dim, low, high });
            }
        }
        Ok(Self { lb, ub })
    }

    /// Number of input dimensions.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.lb.len()
    }

    /// The lower bound of each dimension.
    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lb
    }

    /// The upper bound of each dimension.
    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.ub
    }

    /// Returns `true` if every coordinate of `point` lies within its
    /// dimension's bounds (inclusive on both ends).
    ///
    /// Points of the wrong dimensionality are never contained.
    #[must_use]
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(self.iter())
                .all(|(&v, (low, high))| v >= low && v <= high)
    }

    /// Iterates over `(low, high)` pairs per dimension.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lb.iter().copied().zip(self.ub.iter().copied())
    }
}

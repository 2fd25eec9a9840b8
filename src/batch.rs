//! Candidate batches and selection results.

use core::slice::ChunksExact;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::StimuliPerTrial;

/// A pool of candidate rows, each holding `q` stimulus points of `dim`
/// coordinates.
///
/// Logical shape is `(samps, q, dim)`, stored row-major in one flat
/// buffer. Every coordinate lies within the bounds the pool was drawn
/// from; the pool is immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateBatch {
    data: Vec<f64>,
    samps: usize,
    q: usize,
    dim: usize,
}

impl CandidateBatch {
    /// Wraps a row-major buffer of `samps * q * dim` coordinates.
    pub(crate) fn from_flat(data: Vec<f64>, samps: usize, q: usize, dim: usize) -> Self {
        debug_assert_eq!(data.len(), samps * q * dim);
        Self {
            data,
            samps,
            q,
            dim,
        }
    }

    /// Builds a single-stimulus batch from a list of points, one row each.
    ///
    /// Used to evaluate the posterior at a model's training inputs.
    pub(crate) fn from_points(points: &[Vec<f64>], dim: usize) -> Self {
        let mut data = Vec::with_capacity(points.len() * dim);
        for point in points {
            debug_assert_eq!(point.len(), dim);
            data.extend_from_slice(point);
        }
        Self::from_flat(data, points.len(), 1, dim)
    }

    /// Number of candidate rows in the pool.
    #[must_use]
    pub fn samps(&self) -> usize {
        self.samps
    }

    /// Number of stimulus points per row.
    #[must_use]
    pub fn q(&self) -> usize {
        self.q
    }

    /// Number of coordinates per stimulus point.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of stimulus points across all rows (`samps * q`).
    #[must_use]
    pub fn n_points(&self) -> usize {
        self.samps * self.q
    }

    /// The `j`-th stimulus point of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= samps()` or `j >= q()`.
    #[must_use]
    pub fn point(&self, row: usize, j: usize) -> &[f64] {
        assert!(row < self.samps && j < self.q, "point index out of range");
        let start = (row * self.q + j) * self.dim;
        &self.data[start..start + self.dim]
    }

    /// The full coordinate slice of row `row` (`q * dim` values).
    ///
    /// # Panics
    ///
    /// Panics if `row >= samps()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.samps, "row index out of range");
        let width = self.q * self.dim;
        &self.data[row * width..(row + 1) * width]
    }

    /// Iterates over the stimulus points of one row.
    pub fn row_points(&self, row: usize) -> ChunksExact<'_, f64> {
        self.row(row).chunks_exact(self.dim)
    }

    /// Iterates over every stimulus point in the pool, row-major.
    ///
    /// This is the order the surrogate's posterior entries must follow.
    pub fn iter_points(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.dim)
    }
}

/// One trial's pair of stimuli.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StimulusPair {
    /// The stimulus presented first.
    pub first: Vec<f64>,
    /// The stimulus presented second.
    pub second: Vec<f64>,
}

/// The point(s) chosen by one generation call.
///
/// Single-stimulus designs yield `num_points` query points; paired designs
/// yield `num_points` stimulus pairs, preserving the adjacency of the
/// underlying candidate row (points `2k` and `2k + 1` form trial `k`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selection {
    /// One stimulus per trial; each entry is a query point.
    Single(Vec<Vec<f64>>),
    /// Two stimuli per trial; each entry is a trial's pair.
    Paired(Vec<StimulusPair>),
}

impl Selection {
    /// Number of trials covered by this selection.
    #[must_use]
    pub fn num_points(&self) -> usize {
        match self {
            Self::Single(points) => points.len(),
            Self::Paired(pairs) => pairs.len(),
        }
    }

    /// Iterates over every stimulus in the selection, in presentation order.
    pub fn stimuli(&self) -> Box<dyn Iterator<Item = &[f64]> + '_> {
        match self {
            Self::Single(points) => Box::new(points.iter().map(Vec::as_slice)),
            Self::Paired(pairs) => Box::new(
                pairs
                    .iter()
                    .flat_map(|p| [p.first.as_slice(), p.second.as_slice()]),
            ),
        }
    }
}

/// Restructures a flat sequence of stimulus points into the trial shape.
///
/// Paired designs receive `2 * num_points` points; consecutive points
/// `(2k, 2k + 1)` become trial `k`'s pair.
pub(crate) fn reshape(points: Vec<Vec<f64>>, stimuli_per_trial: StimuliPerTrial) -> Selection {
    match stimuli_per_trial {
        StimuliPerTrial::Single => Selection::Single(points),
        StimuliPerTrial::Paired => {
            debug_assert_eq!(points.len() % 2, 0);
            let mut pairs = Vec::with_capacity(points.len() / 2);
            let mut iter = points.into_iter();
            while let (Some(first), Some(second)) = (iter.next(), iter.next()) {
                pairs.push(StimulusPair { first, second });
            }
            Selection::Paired(pairs)
        }
    }
}

//! Quasi-random candidate pool generation.
//!
//! Pools are drawn from an Owen-scrambled Sobol sequence so that `samps`
//! candidates cover the bounded space far more evenly than independent
//! uniform draws would. Each `(stimulus, coordinate)` slot of a candidate
//! row occupies its own Sobol dimension, so the effective dimensionality
//! of a pool is `dim * q`. Past [`MAX_SOBOL_DIM`] the sequence's
//! uniformity advantage is gone and the direction-number tables run out,
//! so the pool falls back to seeded uniform pseudo-random draws; both
//! paths are fully reproducible from the caller's seed.

use sobol_burley::sample;

use crate::batch::CandidateBatch;
use crate::bounds::Bounds;

/// Highest effective dimensionality (`dim * q`) routed to the Sobol
/// engine. Pools beyond this use the pseudo-random fallback.
pub const MAX_SOBOL_DIM: usize = 256;

/// Draws a candidate pool of logical shape `(samps, q, dim)` within
/// `bounds`.
///
/// `scramble_seed` seeds the Sobol scramble; `rng` backs the
/// high-dimensional fallback path. Both derive from the same caller seed
/// upstream, so equal seeds reproduce equal pools on either path. Every
/// coordinate of the result lies within its dimension's bounds.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn draw_pool(
    bounds: &Bounds,
    samps: usize,
    q: usize,
    scramble_seed: u32,
    rng: &mut fastrand::Rng,
) -> CandidateBatch {
    let dim = bounds.dim();
    let mut data = Vec::with_capacity(samps * q * dim);

    if dim * q <= MAX_SOBOL_DIM {
        for index in 0..samps {
            for j in 0..q {
                for (k, (low, high)) in bounds.iter().enumerate() {
                    let sobol_dim = (j * dim + k) as u32;
                    let unit = f64::from(sample(index as u32, sobol_dim, scramble_seed));
                    data.push(low + unit * (high - low));
                }
            }
        }
    } else {
        for _ in 0..samps * q {
            for (low, high) in bounds.iter() {
                data.push(low + rng.f64() * (high - low));
            }
        }
    }

    CandidateBatch::from_flat(data, samps, q, dim)
}

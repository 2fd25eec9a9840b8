#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Acquisition-driven candidate selection for sequential experiment
//! design. Given a fitted surrogate model of an unknown response surface
//! and an acquisition function scoring how valuable each point would be
//! to query next, the [`Generator`] picks the next point(s) to evaluate
//! by Thompson-style sampling: a quasi-random candidate pool is scored
//! in one batched call and a single candidate is drawn with probability
//! proportional to its relative acquisition value.
//!
//! This trades the guarantee of the single best-scoring candidate for
//! exploration: with dense pools the drawn point is near-optimal, and
//! repeated calls cover promising regions instead of re-querying one
//! argmax.
//!
//! # Getting Started
//!
//! Bring your own surrogate by implementing [`Surrogate`], then build a
//! generator and ask it for the next query point:
//!
//! ```
//! use acqgen::prelude::*;
//!
//! /// A toy surrogate with a posterior peak at x = 0.6.
//! struct Peak;
//!
//! impl Surrogate for Peak {
//!     fn eval_mode(&mut self) {}
//!
//!     fn posterior(&self, points: &CandidateBatch) -> acqgen::Result<Posterior> {
//!         let mean = points
//!             .iter_points()
//!             .map(|p| 1.0 - (p[0] - 0.6).powi(2))
//!             .collect();
//!         let std = vec![0.1; points.n_points()];
//!         Ok(Posterior { mean, std })
//!     }
//! }
//!
//! let generator = Generator::builder()
//!     .bounds(vec![0.0], vec![1.0])
//!     .acquisition(AcquisitionSpec::new(AcquisitionKind::UpperConfidenceBound))
//!     .stimuli_per_trial(StimuliPerTrial::Single)
//!     .samps(256)
//!     .build()?;
//!
//! let mut model = Peak;
//! let next = generator.gen(1, &mut model, &GenOptions { seed: Some(7) })?;
//! match next {
//!     Selection::Single(points) => assert!((0.0..=1.0).contains(&points[0][0])),
//!     Selection::Paired(_) => unreachable!("single-stimulus design"),
//! }
//! # Ok::<(), acqgen::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Generator`] | Drive one selection: pool → score → select → reshape. |
//! | [`Surrogate`] | Capability interface your fitted model implements. |
//! | [`AcquisitionSpec`] | Which acquisition variant to score with, plus extra parameters. |
//! | [`Bounds`] | Validated lower/upper bounds of the candidate space. |
//! | [`StimuliPerTrial`] | Single-stimulus or paired-comparison trial design. |
//! | [`Selection`] | The chosen query point(s), shaped for the trial design. |
//!
//! # Acquisition Guide
//!
//! | Kind | Convention | Extra parameters |
//! |------|------------|------------------|
//! | [`ExpectedImprovement`](AcquisitionKind::ExpectedImprovement) | default | `best_f` (required) |
//! | [`LogExpectedImprovement`](AcquisitionKind::LogExpectedImprovement) | default | `best_f` (required) |
//! | [`UpperConfidenceBound`](AcquisitionKind::UpperConfidenceBound) | default | `beta` (default 2.0) |
//! | [`NoisyExpectedImprovement`](AcquisitionKind::NoisyExpectedImprovement) | baseline-requiring | — |
//! | [`LogNoisyExpectedImprovement`](AcquisitionKind::LogNoisyExpectedImprovement) | baseline-requiring | — |
//! | [`QNoisyExpectedImprovement`](AcquisitionKind::QNoisyExpectedImprovement) | baseline-requiring | — |
//! | [`QLogNoisyExpectedImprovement`](AcquisitionKind::QLogNoisyExpectedImprovement) | baseline-requiring | — |
//! | [`ExpectedUtilityOfBestOption`](AcquisitionKind::ExpectedUtilityOfBestOption) | preference (model only) | ignored |
//!
//! Baseline-requiring kinds derive their incumbent from the model's
//! recorded training inputs and fail with
//! [`Error::MissingTrainInputs`] when the model has none.
//!
//! # Reproducibility
//!
//! Pass [`GenOptions`] with a `seed` to make a call fully deterministic:
//! the same seed drives both the Sobol scramble (or its high-dimensional
//! pseudo-random fallback) and the final weighted draw. Unseeded calls
//! consume the generator's ambient RNG, which can itself be seeded at
//! build time via [`GeneratorBuilder::seed`].
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on configuration and result types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) around generation | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod acquisition;
mod batch;
mod bounds;
mod error;
mod generator;
mod model;
mod pool;
mod select;
mod types;

pub use acquisition::{AcquisitionKind, AcquisitionSpec, DEFAULT_UCB_BETA};
pub use batch::{CandidateBatch, Selection, StimulusPair};
pub use bounds::Bounds;
pub use error::{Error, Result};
pub use generator::{GenOptions, Generator, GeneratorBuilder, DEFAULT_SAMPS};
pub use model::{Posterior, Surrogate};
pub use pool::MAX_SOBOL_DIM;
pub use types::StimuliPerTrial;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use acqgen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::acquisition::{AcquisitionKind, AcquisitionSpec};
    pub use crate::batch::{CandidateBatch, Selection, StimulusPair};
    pub use crate::bounds::Bounds;
    pub use crate::error::{Error, Result};
    pub use crate::generator::{GenOptions, Generator, GeneratorBuilder};
    pub use crate::model::{Posterior, Surrogate};
    pub use crate::types::StimuliPerTrial;
}

//! The generation façade: pool → score → select → reshape.

use parking_lot::Mutex;

use crate::acquisition::{self, AcquisitionSpec};
use crate::batch::{reshape, Selection};
use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::model::Surrogate;
use crate::pool;
use crate::select;
use crate::types::StimuliPerTrial;

/// Default candidate pool size.
pub const DEFAULT_SAMPS: usize = 1000;

/// Per-call options for [`Generator::gen`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GenOptions {
    /// Seed for reproducible sampling and selection. When absent, the
    /// generator's ambient RNG supplies one, and results vary per call.
    pub seed: Option<u64>,
}

/// Chooses the next experiment point(s) by Thompson-style sampling over
/// an acquisition-scored candidate pool.
///
/// Each [`gen`](Self::gen) call draws a quasi-random candidate pool
/// within the configured bounds, scores every candidate row with the
/// configured acquisition function against the caller's surrogate model,
/// draws one row with probability proportional to its shifted score, and
/// reshapes that row for the experiment's trial design. The generator
/// holds no state across calls beyond its immutable configuration and an
/// ambient RNG used only when no per-call seed is given.
///
/// # Examples
///
/// ```
/// use acqgen::prelude::*;
///
/// struct Flat;
///
/// impl Surrogate for Flat {
///     fn eval_mode(&mut self) {}
///     fn posterior(&self, points: &CandidateBatch) -> acqgen::Result<Posterior> {
///         Ok(Posterior {
///             mean: vec![0.0; points.n_points()],
///             std: vec![1.0; points.n_points()],
///         })
///     }
/// }
///
/// let generator = Generator::builder()
///     .bounds(vec![0.0, 0.0], vec![1.0, 1.0])
///     .acquisition(AcquisitionSpec::new(AcquisitionKind::UpperConfidenceBound))
///     .stimuli_per_trial(StimuliPerTrial::Single)
///     .samps(128)
///     .build()?;
///
/// let mut model = Flat;
/// let next = generator.gen(1, &mut model, &GenOptions { seed: Some(7) })?;
/// assert_eq!(next.num_points(), 1);
/// # Ok::<(), acqgen::Error>(())
/// ```
#[derive(Debug)]
pub struct Generator {
    bounds: Bounds,
    acquisition: AcquisitionSpec,
    samps: usize,
    stimuli_per_trial: StimuliPerTrial,
    rng: Mutex<fastrand::Rng>,
}

impl Generator {
    /// Returns a [`GeneratorBuilder`] for constructing a generator.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// The candidate-space bounds.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The configured acquisition spec.
    #[must_use]
    pub fn acquisition(&self) -> &AcquisitionSpec {
        &self.acquisition
    }

    /// The candidate pool size per call.
    #[must_use]
    pub fn samps(&self) -> usize {
        self.samps
    }

    /// The configured trial design.
    #[must_use]
    pub fn stimuli_per_trial(&self) -> StimuliPerTrial {
        self.stimuli_per_trial
    }

    /// Queries the next point(s) to evaluate.
    ///
    /// Draws `samps` candidate rows of `num_points` points each
    /// (`2 * num_points` for paired designs), scores them in one batched
    /// acquisition evaluation, and selects a single row by weighted
    /// random draw; the `num_points` candidates are drawn jointly, not
    /// one draw per output point. Switching the model into evaluation
    /// mode is a side effect of every call.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroPoints`] if `num_points` is zero.
    /// - [`Error::DimensionMismatch`] if the model reports an input
    ///   dimensionality different from the bounds.
    /// - Any capability or evaluation error from the acquisition step,
    ///   propagated unmodified.
    pub fn gen(
        &self,
        num_points: usize,
        model: &mut dyn Surrogate,
        options: &GenOptions,
    ) -> Result<Selection> {
        if num_points == 0 {
            return Err(Error::ZeroPoints);
        }
        if let Some(model_dim) = model.input_dim() {
            if model_dim != self.bounds.dim() {
                return Err(Error::DimensionMismatch {
                    bounds: self.bounds.dim(),
                    model: model_dim,
                });
            }
        }

        #[cfg(feature = "tracing")]
        let started = std::time::Instant::now();
        trace_info!(num_points, "starting generation");

        let q = num_points * self.stimuli_per_trial.factor();
        let seed = options.seed.unwrap_or_else(|| self.rng.lock().u64(..));
        let mut rng = fastrand::Rng::with_seed(seed);

        #[allow(clippy::cast_possible_truncation)]
        let scramble_seed = seed as u32;
        let pool = pool::draw_pool(&self.bounds, self.samps, q, scramble_seed, &mut rng);
        trace_debug!(
            samps = pool.samps(),
            q = pool.q(),
            dim = pool.dim(),
            "candidate pool drawn"
        );

        let scores = acquisition::evaluate(&self.acquisition, model, &pool)?;
        let chosen = select::select(&scores, &mut rng);
        trace_debug!(chosen, "candidate row selected");

        let points: Vec<Vec<f64>> = pool.row_points(chosen).map(<[f64]>::to_vec).collect();

        trace_info!(elapsed = ?started.elapsed(), "generation complete");
        Ok(reshape(points, self.stimuli_per_trial))
    }
}

/// A builder for [`Generator`] with a fluent API.
///
/// # Defaults
///
/// - `samps`: [`DEFAULT_SAMPS`] (1000)
/// - ambient seed: from entropy
///
/// Bounds, the acquisition spec, and the trial design have no defaults
/// and must be provided.
///
/// # Examples
///
/// ```
/// use acqgen::{AcquisitionKind, AcquisitionSpec, Generator, StimuliPerTrial};
///
/// let generator = Generator::builder()
///     .bounds(vec![0.0], vec![1.0])
///     .acquisition(
///         AcquisitionSpec::new(AcquisitionKind::ExpectedImprovement).with_param("best_f", 0.2),
///     )
///     .stimuli_per_trial(StimuliPerTrial::Paired)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(generator.samps(), acqgen::DEFAULT_SAMPS);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GeneratorBuilder {
    lb: Option<Vec<f64>>,
    ub: Option<Vec<f64>>,
    acquisition: Option<AcquisitionSpec>,
    samps: Option<usize>,
    stimuli_per_trial: Option<StimuliPerTrial>,
    seed: Option<u64>,
}

impl GeneratorBuilder {
    /// Creates a builder with no configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lower and upper bounds of the candidate space.
    #[must_use]
    pub fn bounds(mut self, lb: Vec<f64>, ub: Vec<f64>) -> Self {
        self.lb = Some(lb);
        self.ub = Some(ub);
        self
    }

    /// Sets the acquisition function to score candidates with.
    #[must_use]
    pub fn acquisition(mut self, spec: AcquisitionSpec) -> Self {
        self.acquisition = Some(spec);
        self
    }

    /// Sets the candidate pool size.
    ///
    /// Defaults to [`DEFAULT_SAMPS`]. Larger pools approximate the
    /// acquisition optimum more densely at linear cost in posterior
    /// evaluations.
    #[must_use]
    pub fn samps(mut self, samps: usize) -> Self {
        self.samps = Some(samps);
        self
    }

    /// Sets the trial design. Required; there is no default.
    #[must_use]
    pub fn stimuli_per_trial(mut self, stimuli_per_trial: StimuliPerTrial) -> Self {
        self.stimuli_per_trial = Some(stimuli_per_trial);
        self
    }

    /// Seeds the generator's ambient RNG, making unseeded `gen` calls
    /// reproducible as a sequence.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration and builds the generator.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingBounds`], [`Error::MissingAcquisition`], or
    ///   [`Error::MissingStimuliPerTrial`] for absent required fields.
    /// - Any bounds validation error from [`Bounds::new`].
    /// - [`Error::InvalidSamps`] if the pool size is zero.
    pub fn build(self) -> Result<Generator> {
        let lb = self.lb.ok_or(Error::MissingBounds)?;
        let ub = self.ub.ok_or(Error::MissingBounds)?;
        let bounds = Bounds::new(lb, ub)?;
        let acquisition = self.acquisition.ok_or(Error::MissingAcquisition)?;
        let stimuli_per_trial = self
            .stimuli_per_trial
            .ok_or(Error::MissingStimuliPerTrial)?;
        let samps = self.samps.unwrap_or(DEFAULT_SAMPS);
        if samps == 0 {
            return Err(Error::InvalidSamps);
        }
        let rng = self
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);

        Ok(Generator {
            bounds,
            acquisition,
            samps,
            stimuli_per_trial,
            rng: Mutex::new(rng),
        })
    }
}

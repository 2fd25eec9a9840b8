//! Acquisition-function variants and batched evaluation.
//!
//! The crate supports a closed set of acquisition kinds with three
//! distinct instantiation conventions:
//!
//! 1. **Preference utility** — [`ExpectedUtilityOfBestOption`] is built
//!    from the model alone; extra parameters are ignored.
//! 2. **Baseline-requiring** — the noisy-improvement family needs the
//!    model's recorded training inputs to derive its incumbent; a model
//!    without them is a capability error, never a silent downgrade.
//! 3. **Default** — everything else is built from the model plus extra
//!    named parameters.
//!
//! Instantiation is a match over [`AcquisitionKind`] producing a tagged
//! strategy variant; adding a kind means adding one arm. Evaluation is
//! batched: one posterior call covers every stimulus point in the pool,
//! then each candidate row reduces to a single scalar score.
//!
//! All kinds score for *maximization* of the latent objective.
//!
//! [`ExpectedUtilityOfBestOption`]: AcquisitionKind::ExpectedUtilityOfBestOption

use core::fmt;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::batch::CandidateBatch;
use crate::error::{Error, Result};
use crate::model::{Posterior, Surrogate};

/// Default exploration weight for
/// [`UpperConfidenceBound`](AcquisitionKind::UpperConfidenceBound).
pub const DEFAULT_UCB_BETA: f64 = 2.0;

/// Floor applied before taking logs in the `Log*` kinds.
const LOG_FLOOR: f64 = 1e-12;

/// Standard deviations below this are treated as exact predictions.
const MIN_STD: f64 = 1e-12;

/// The closed set of supported acquisition-function variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AcquisitionKind {
    /// Analytic expected improvement over a caller-supplied `best_f`.
    ExpectedImprovement,
    /// Log of the expected improvement, for numerically small tails.
    LogExpectedImprovement,
    /// Expected improvement over an incumbent derived from the posterior
    /// at the model's training inputs.
    NoisyExpectedImprovement,
    /// Log-scale variant of [`NoisyExpectedImprovement`](Self::NoisyExpectedImprovement).
    LogNoisyExpectedImprovement,
    /// Batch variant of [`NoisyExpectedImprovement`](Self::NoisyExpectedImprovement).
    QNoisyExpectedImprovement,
    /// Batch variant of [`LogNoisyExpectedImprovement`](Self::LogNoisyExpectedImprovement).
    QLogNoisyExpectedImprovement,
    /// Optimistic `mean + sqrt(beta) * std` bound.
    UpperConfidenceBound,
    /// Expected value of the best stimulus in the row, for paired
    /// preference designs.
    ExpectedUtilityOfBestOption,
}

impl AcquisitionKind {
    /// Whether this kind is instantiated with the model's recorded
    /// training inputs.
    #[must_use]
    pub fn requires_baseline(self) -> bool {
        matches!(
            self,
            Self::NoisyExpectedImprovement
                | Self::LogNoisyExpectedImprovement
                | Self::QNoisyExpectedImprovement
                | Self::QLogNoisyExpectedImprovement
        )
    }
}

impl fmt::Display for AcquisitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ExpectedImprovement => "ExpectedImprovement",
            Self::LogExpectedImprovement => "LogExpectedImprovement",
            Self::NoisyExpectedImprovement => "NoisyExpectedImprovement",
            Self::LogNoisyExpectedImprovement => "LogNoisyExpectedImprovement",
            Self::QNoisyExpectedImprovement => "qNoisyExpectedImprovement",
            Self::QLogNoisyExpectedImprovement => "qLogNoisyExpectedImprovement",
            Self::UpperConfidenceBound => "UpperConfidenceBound",
            Self::ExpectedUtilityOfBestOption => "ExpectedUtilityOfBestOption",
        };
        f.write_str(name)
    }
}

/// An acquisition identity plus extra named parameters.
///
/// Immutable once constructed; builder methods consume and return the
/// spec.
///
/// # Examples
///
/// ```
/// use acqgen::{AcquisitionKind, AcquisitionSpec};
///
/// let spec = AcquisitionSpec::new(AcquisitionKind::UpperConfidenceBound)
///     .with_param("beta", 4.0);
/// assert_eq!(spec.kind(), AcquisitionKind::UpperConfidenceBound);
/// assert_eq!(spec.param("beta"), Some(4.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcquisitionSpec {
    kind: AcquisitionKind,
    params: HashMap<String, f64>,
}

impl AcquisitionSpec {
    /// Creates a spec for the given kind with no extra parameters.
    #[must_use]
    pub fn new(kind: AcquisitionKind) -> Self {
        Self {
            kind,
            params: HashMap::new(),
        }
    }

    /// Adds a named parameter, e.g. `best_f` for the improvement family
    /// or `beta` for the confidence bound.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// The acquisition identity.
    #[must_use]
    pub fn kind(&self) -> AcquisitionKind {
        self.kind
    }

    /// Looks up an extra parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<f64> {
        self.params.get(name).copied()
    }
}

/// Instantiated evaluation strategies, one per calling convention.
enum Instantiated {
    /// Expected value of the best stimulus in the row.
    BestOptionUtility,
    /// Improvement over a fixed or baseline-derived incumbent.
    Improvement { incumbent: f64, log: bool },
    /// Optimistic mean-plus-deviation bound.
    ConfidenceBound { beta: f64 },
}

/// Resolves the spec into a concrete strategy against the given model.
fn instantiate(spec: &AcquisitionSpec, model: &dyn Surrogate) -> Result<Instantiated> {
    use AcquisitionKind as K;

    match spec.kind() {
        K::ExpectedUtilityOfBestOption => Ok(Instantiated::BestOptionUtility),
        kind @ (K::NoisyExpectedImprovement
        | K::LogNoisyExpectedImprovement
        | K::QNoisyExpectedImprovement
        | K::QLogNoisyExpectedImprovement) => {
            let baseline = model
                .train_inputs()
                .filter(|inputs| !inputs.is_empty())
                .ok_or(Error::MissingTrainInputs { kind })?;
            let incumbent = baseline_incumbent(model, baseline)?;
            let log = matches!(
                kind,
                K::LogNoisyExpectedImprovement | K::QLogNoisyExpectedImprovement
            );
            Ok(Instantiated::Improvement { incumbent, log })
        }
        kind @ (K::ExpectedImprovement | K::LogExpectedImprovement) => {
            let incumbent = spec
                .param("best_f")
                .ok_or(Error::MissingAcquisitionParam {
                    kind,
                    name: "best_f",
                })?;
            let log = matches!(kind, K::LogExpectedImprovement);
            Ok(Instantiated::Improvement { incumbent, log })
        }
        K::UpperConfidenceBound => Ok(Instantiated::ConfidenceBound {
            beta: spec.param("beta").unwrap_or(DEFAULT_UCB_BETA),
        }),
    }
}

/// The best posterior mean over the model's training inputs.
///
/// Using the posterior rather than raw observations keeps the incumbent
/// robust to observation noise.
fn baseline_incumbent(model: &dyn Surrogate, baseline: &[Vec<f64>]) -> Result<f64> {
    let dim = baseline[0].len();
    let batch = CandidateBatch::from_points(baseline, dim);
    let posterior = model.posterior(&batch)?;
    check_posterior(&posterior, batch.n_points())?;
    Ok(posterior
        .mean
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max))
}

fn check_posterior(posterior: &Posterior, expected: usize) -> Result<()> {
    let got = posterior.mean.len().min(posterior.std.len());
    if posterior.mean.len() != expected || posterior.std.len() != expected {
        return Err(Error::PosteriorSize { expected, got });
    }
    Ok(())
}

/// Scores every candidate row of `pool` under `spec` against `model`.
///
/// Switches the model into evaluation mode (exactly once), resolves the
/// spec's instantiation convention, queries the posterior for the whole
/// pool in one call, and reduces each row to a scalar.
pub(crate) fn evaluate(
    spec: &AcquisitionSpec,
    model: &mut dyn Surrogate,
    pool: &CandidateBatch,
) -> Result<Vec<f64>> {
    model.eval_mode();

    let acqf = instantiate(spec, model)?;
    let posterior = model.posterior(pool)?;
    check_posterior(&posterior, pool.n_points())?;

    let q = pool.q();
    let scores = (0..pool.samps())
        .map(|row| {
            let start = row * q;
            score_row(
                &acqf,
                &posterior.mean[start..start + q],
                &posterior.std[start..start + q],
            )
        })
        .collect();
    Ok(scores)
}

/// Reduces one candidate row's per-point posteriors to a scalar score.
fn score_row(acqf: &Instantiated, mean: &[f64], std: &[f64]) -> f64 {
    match *acqf {
        Instantiated::Improvement { incumbent, log } => {
            let best = mean
                .iter()
                .zip(std)
                .map(|(&m, &s)| expected_improvement(m, s, incumbent))
                .fold(f64::NEG_INFINITY, f64::max);
            if log {
                best.max(LOG_FLOOR).ln()
            } else {
                best
            }
        }
        Instantiated::ConfidenceBound { beta } => mean
            .iter()
            .zip(std)
            .map(|(&m, &s)| m + beta.sqrt() * s)
            .fold(f64::NEG_INFINITY, f64::max),
        Instantiated::BestOptionUtility => best_option_utility(mean, std),
    }
}

/// Analytic expected improvement of a Gaussian over `incumbent`.
///
/// `EI = (mu - incumbent) * Phi(z) + std * phi(z)`, `z = (mu - incumbent) / std`.
fn expected_improvement(mean: f64, std: f64, incumbent: f64) -> f64 {
    if std < MIN_STD {
        return (mean - incumbent).max(0.0);
    }
    let z = (mean - incumbent) / std;
    let improvement = (mean - incumbent) * norm_cdf(z) + std * norm_pdf(z);
    improvement.max(0.0)
}

/// Expected value of the maximum over a row's per-point posteriors.
///
/// Folds the row with Clark's pairwise moment matching: exact for two
/// independent Gaussians, moment-matched beyond. A single-point row
/// reduces to its posterior mean.
fn best_option_utility(mean: &[f64], std: &[f64]) -> f64 {
    debug_assert!(!mean.is_empty());
    let mut m = mean[0];
    let mut v = std[0] * std[0];
    for i in 1..mean.len() {
        let (next_m, next_v) = max_moments(m, v, mean[i], std[i] * std[i]);
        m = next_m;
        v = next_v;
    }
    m
}

/// First two moments of `max(A, B)` for independent Gaussians
/// (Clark, 1961).
fn max_moments(m1: f64, v1: f64, m2: f64, v2: f64) -> (f64, f64) {
    let s2 = v1 + v2;
    if s2 < MIN_STD * MIN_STD {
        return (m1.max(m2), v1.max(v2));
    }
    let s = s2.sqrt();
    let alpha = (m1 - m2) / s;
    let cdf = norm_cdf(alpha);
    let pdf = norm_pdf(alpha);

    let first = m1 * cdf + m2 * (1.0 - cdf) + s * pdf;
    let second =
        (m1 * m1 + v1) * cdf + (m2 * m2 + v2) * (1.0 - cdf) + (m1 + m2) * s * pdf;
    (first, (second - first * first).max(0.0))
}

/// Standard normal PDF.
fn norm_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal CDF (Hart rational approximation).
fn norm_cdf(x: f64) -> f64 {
    if x < -8.0 {
        return 0.0;
    }
    if x > 8.0 {
        return 1.0;
    }

    let abs_x = x.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * abs_x);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly = 0.319_381_530 * t - 0.356_563_782 * t2 + 1.781_477_937 * t3 - 1.821_255_978 * t4
        + 1.330_274_429 * t5;
    let cdf = 1.0 - norm_pdf(abs_x) * poly;

    if x >= 0.0 {
        cdf
    } else {
        1.0 - cdf
    }
}

//! The capability interface the generator requires from a surrogate model.

use crate::batch::CandidateBatch;
use crate::error::Result;

/// Gaussian posterior over a set of points, one entry per point.
///
/// Entries follow the row-major point order of the batch they were
/// computed for (see [`CandidateBatch::iter_points`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Posterior {
    /// Posterior mean per point.
    pub mean: Vec<f64>,
    /// Posterior standard deviation per point.
    pub std: Vec<f64>,
}

/// A fitted surrogate model of the response surface.
///
/// The generator depends only on this minimal capability set and never on
/// a concrete model implementation. Models are externally owned; a
/// generation call borrows the model mutably for its duration, which also
/// rules out concurrent retraining while a call is in flight.
pub trait Surrogate {
    /// Switches the model into evaluation mode, disabling any
    /// training-only stochastic behavior.
    ///
    /// Called exactly once per generation call, before any posterior
    /// query. The switch is one-way: the generator never restores the
    /// model's previous mode.
    fn eval_mode(&mut self);

    /// Computes the Gaussian posterior for every point in `points`, in
    /// row-major point order.
    ///
    /// The returned [`Posterior`] must hold exactly
    /// [`points.n_points()`](CandidateBatch::n_points) mean and standard
    /// deviation entries; the generator rejects mismatched sizes.
    ///
    /// # Errors
    ///
    /// Implementations report their own evaluation failures, typically as
    /// [`Error::Surrogate`](crate::Error::Surrogate).
    fn posterior(&self, points: &CandidateBatch) -> Result<Posterior>;

    /// Historical training inputs, if the model retains them.
    ///
    /// Baseline-requiring acquisition kinds refuse to run against models
    /// that return `None` here.
    fn train_inputs(&self) -> Option<&[Vec<f64>]> {
        None
    }

    /// The input dimensionality the model was fitted on, if known.
    ///
    /// When available, the generator checks it against its bounds before
    /// sampling.
    fn input_dim(&self) -> Option<usize> {
        None
    }
}

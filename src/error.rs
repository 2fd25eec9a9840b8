#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower and upper bound vectors have different lengths.
    #[error("bounds length mismatch: lower has {lb} entries but upper has {ub}")]
    BoundsLengthMismatch {
        /// Number of lower-bound entries.
        lb: usize,
        /// Number of upper-bound entries.
        ub: usize,
    },

    /// Returned when a lower bound is not strictly below its upper bound,
    /// or either bound is not finite.
    #[error("invalid bounds in dimension {dim}: low {low} must be finite and less than high {high}")]
    InvalidBounds {
        /// The offending dimension index.
        dim: usize,
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when the bound vectors cover zero dimensions.
    #[error("bounds must cover at least one dimension")]
    EmptyBounds,

    /// Returned when a generator is built without bounds.
    #[error("generator requires lower and upper bounds")]
    MissingBounds,

    /// Returned when a generator is built without an acquisition spec.
    #[error("generator requires an acquisition spec")]
    MissingAcquisition,

    /// Returned when a generator is built without an explicit stimulus count.
    #[error("stimuli per trial must be set explicitly")]
    MissingStimuliPerTrial,

    /// Returned when converting an unsupported stimulus count.
    #[error("stimuli per trial must be 1 or 2, got {0}")]
    InvalidStimuliPerTrial(u32),

    /// Returned when the candidate pool size is zero.
    #[error("candidate pool size must be at least 1")]
    InvalidSamps,

    /// Returned when the bounds disagree with the model's input dimensionality.
    #[error("dimension mismatch: bounds describe {bounds} dimensions but the model expects {model}")]
    DimensionMismatch {
        /// Dimensionality described by the bounds.
        bounds: usize,
        /// Dimensionality the model was fitted on.
        model: usize,
    },

    /// Returned when a baseline-requiring acquisition is paired with a model
    /// that does not retain its training inputs.
    #[error("{kind} requires a model that retains its training inputs")]
    MissingTrainInputs {
        /// The acquisition kind that needed the baseline.
        kind: crate::acquisition::AcquisitionKind,
    },

    /// Returned when an acquisition kind is missing a required parameter.
    #[error("{kind} requires the '{name}' parameter")]
    MissingAcquisitionParam {
        /// The acquisition kind that needed the parameter.
        kind: crate::acquisition::AcquisitionKind,
        /// The missing parameter name.
        name: &'static str,
    },

    /// Returned when `gen` is asked for zero points.
    #[error("num_points must be at least 1")]
    ZeroPoints,

    /// Returned when the surrogate's posterior covers the wrong number of points.
    #[error("posterior size mismatch: expected {expected} entries, got {got}")]
    PosteriorSize {
        /// The number of points submitted for evaluation.
        expected: usize,
        /// The number of posterior entries returned.
        got: usize,
    },

    /// Returned when the surrogate itself fails to evaluate.
    #[error("surrogate model failure: {0}")]
    Surrogate(String),
}

pub type Result<T> = core::result::Result<T, Error>;

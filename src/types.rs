//! Core types shared across the crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The number of stimuli presented per experimental trial.
///
/// Paired designs show two stimuli side by side and record a comparison
/// judgement; single designs query one point at a time. The variant chosen
/// here decides both the width of each candidate row (`q`) and the shape of
/// the final [`Selection`](crate::Selection).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StimuliPerTrial {
    /// One stimulus per trial.
    Single,
    /// Two stimuli per trial, presented as a pair.
    Paired,
}

impl StimuliPerTrial {
    /// Stimulus multiplicity as a factor on the requested point count.
    #[must_use]
    pub fn factor(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Paired => 2,
        }
    }
}

impl TryFrom<u32> for StimuliPerTrial {
    type Error = Error;

    /// Converts a raw stimulus count as found in experiment configurations.
    ///
    /// Only 1 and 2 are representable; anything else is a configuration
    /// error surfaced to the caller.
    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Paired),
            n => Err(Error::InvalidStimuliPerTrial(n)),
        }
    }
}

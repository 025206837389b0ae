//! Bounded percentage value

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A whole percentage in `0..=100`
///
/// Produced by the dirt detector and compared against the dirt threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Percentage(u8);

/// Error returned for values above 100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PercentageError {
    /// Value exceeds 100
    OutOfRange,
}

impl fmt::Display for PercentageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentageError::OutOfRange => f.write_str("percentage above 100"),
        }
    }
}

impl Percentage {
    /// Upper bound
    pub const MAX: u8 = 100;

    pub const fn new(value: u8) -> Result<Self, PercentageError> {
        if value > Self::MAX {
            Err(PercentageError::OutOfRange)
        } else {
            Ok(Self(value))
        }
    }

    /// Create a percentage, clamping anything above 100
    pub const fn saturating(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = PercentageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

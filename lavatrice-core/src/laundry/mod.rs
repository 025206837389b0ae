//! Laundry value types
//!
//! Everything a wash request is made of, and what it reports back.
//! All values are immutable once built and are created per request.

pub mod batch;
pub mod percentage;
pub mod program;
pub mod status;

pub use batch::{LaundryBatch, LaundryBatchBuilder, Material};
pub use percentage::{Percentage, PercentageError};
pub use program::{Program, ProgramConfiguration, ProgramConfigurationBuilder};
pub use status::{ErrorCode, LaundryStatus, WashResult};

use core::fmt;

/// Errors returned when building a laundry value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuildError {
    /// Batch built without a weight
    MissingWeight,
    /// Weight is zero, negative, or not a finite number
    InvalidWeight,
    /// Batch built without a material
    MissingMaterial,
    /// Configuration built without a program
    MissingProgram,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingWeight => f.write_str("batch weight not set"),
            BuildError::InvalidWeight => f.write_str("batch weight must be a positive number"),
            BuildError::MissingMaterial => f.write_str("batch material not set"),
            BuildError::MissingProgram => f.write_str("program not set"),
        }
    }
}

//! Outcome of a wash request

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::fmt;

use super::Program;

/// Overall result of a wash request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WashResult {
    Success,
    Failure,
}

/// Reasons a batch is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCode {
    /// Batch weight exceeds the machine's limit
    TooHeavy,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::TooHeavy => f.write_str("laundry batch is too heavy"),
        }
    }
}

/// Status reported for a wash request
///
/// A failed request carries its error code, a successful one the program
/// that actually ran. There is no way to carry both or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LaundryStatus {
    Success { program: Program },
    Failure { error: ErrorCode },
}

impl LaundryStatus {
    pub const fn success(program: Program) -> Self {
        LaundryStatus::Success { program }
    }

    pub const fn failure(error: ErrorCode) -> Self {
        LaundryStatus::Failure { error }
    }

    pub const fn result(&self) -> WashResult {
        match self {
            LaundryStatus::Success { .. } => WashResult::Success,
            LaundryStatus::Failure { .. } => WashResult::Failure,
        }
    }

    /// Error code, present only on failure
    pub const fn error_code(&self) -> Option<ErrorCode> {
        match self {
            LaundryStatus::Failure { error } => Some(*error),
            LaundryStatus::Success { .. } => None,
        }
    }

    /// Program that ran, present only on success
    pub const fn run_program(&self) -> Option<Program> {
        match self {
            LaundryStatus::Success { program } => Some(*program),
            LaundryStatus::Failure { .. } => None,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, LaundryStatus::Success { .. })
    }
}

impl From<ErrorCode> for LaundryStatus {
    fn from(error: ErrorCode) -> Self {
        LaundryStatus::failure(error)
    }
}

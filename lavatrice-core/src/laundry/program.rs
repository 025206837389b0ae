//! Wash programs and the per-request program configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::BuildError;

/// Wash program
///
/// `Autodetect` is a request: the controller replaces it with `Medium` or
/// `Long` from the detected dirt degree before anything runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Program {
    Short,
    Medium,
    Long,
    Autodetect,
}

impl Program {
    /// Fixed wash duration in minutes
    ///
    /// `Autodetect` has no duration of its own.
    pub const fn time_in_minutes(&self) -> u16 {
        match self {
            Program::Short => 30,
            Program::Medium => 60,
            Program::Long => 120,
            Program::Autodetect => 0,
        }
    }

    pub const fn is_autodetect(&self) -> bool {
        matches!(self, Program::Autodetect)
    }
}

/// Program selection for a single wash request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfiguration {
    program: Program,
    spin: bool,
}

impl ProgramConfiguration {
    pub const fn new(program: Program, spin: bool) -> Self {
        Self { program, spin }
    }

    /// Start building a configuration
    pub fn builder() -> ProgramConfigurationBuilder {
        ProgramConfigurationBuilder::default()
    }

    /// Requested program (may be `Autodetect`)
    pub fn program(&self) -> Program {
        self.program
    }

    /// Whether spinning was requested
    pub fn spin(&self) -> bool {
        self.spin
    }
}

/// Builder for [`ProgramConfiguration`]
///
/// Spin is off unless requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramConfigurationBuilder {
    program: Option<Program>,
    spin: bool,
}

impl ProgramConfigurationBuilder {
    pub fn with_program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    pub fn with_spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    pub fn build(self) -> Result<ProgramConfiguration, BuildError> {
        let program = self.program.ok_or(BuildError::MissingProgram)?;
        Ok(ProgramConfiguration::new(program, self.spin))
    }
}

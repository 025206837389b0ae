//! Wash steps and the plan built from them

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::laundry::{LaundryBatch, Material, Program};

/// Longest possible plan: pour, wash, spin, release
pub const MAX_STEPS: usize = 4;

/// A single collaborator action
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// Fill the drum for the batch weight
    Pour { weight_kg: f32 },
    /// Run the wash cycle
    RunWashing { minutes: u16 },
    /// Spin the drum
    Spin,
    /// Drain the drum
    Release,
}

/// Spin rule: only when requested, and never for delicate fabric
pub fn should_spin(material: Material, spin: bool) -> bool {
    spin && !material.is_delicate()
}

/// Ordered steps for one wash run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WashPlan {
    program: Program,
    steps: Vec<Step, MAX_STEPS>,
}

impl WashPlan {
    /// Plan a run of `program` for `batch`
    ///
    /// `program` must already be resolved; it is never `Autodetect` when
    /// coming from the controller.
    pub fn new(batch: &LaundryBatch, program: Program, spin: bool) -> Self {
        let spin_step = should_spin(batch.material(), spin).then_some(Step::Spin);

        let mut steps = Vec::new();
        steps.extend(
            [
                Some(Step::Pour {
                    weight_kg: batch.weight_kg(),
                }),
                Some(Step::RunWashing {
                    minutes: program.time_in_minutes(),
                }),
                spin_step,
                Some(Step::Release),
            ]
            .into_iter()
            .flatten(),
        );

        Self { program, steps }
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Check if the plan includes a spin
    pub fn spins(&self) -> bool {
        self.steps.contains(&Step::Spin)
    }

    /// Drum time in minutes
    pub fn total_minutes(&self) -> u16 {
        self.steps
            .iter()
            .map(|step| match step {
                Step::RunWashing { minutes } => *minutes,
                _ => 0,
            })
            .sum()
    }
}

//! Washing machine controller implementation
//!
//! One call to [`WashingMachine::start`] handles one request from start to
//! finish:
//!
//! 1. Refuse batches over the weight limit (no collaborator is touched)
//! 2. Resolve `Autodetect` through the dirt detector
//! 3. Pour, wash, optionally spin, release
//!
//! ```ignore
//! let mut machine = WashingMachine::new(detector, engine, pump);
//! let batch = LaundryBatch::builder()
//!     .with_weight_kg(5.0)
//!     .with_material(Material::Cotton)
//!     .build()?;
//! let config = ProgramConfiguration::new(Program::Autodetect, true);
//!
//! let status = machine.start(batch, config);
//! ```

use crate::config::{ConfigError, WashSettings};
use crate::laundry::{ErrorCode, LaundryBatch, LaundryStatus, Program, ProgramConfiguration};
use crate::plan::{Step, WashPlan};
use crate::traits::{DirtDetector, Engine, WaterPump};

/// Washing machine controller
///
/// Owns its collaborators; use [`WashingMachine::into_parts`] to get them
/// back.
#[derive(Debug)]
pub struct WashingMachine<D, E, P> {
    detector: D,
    engine: E,
    pump: P,
    settings: WashSettings,
}

impl<D, E, P> WashingMachine<D, E, P>
where
    D: DirtDetector,
    E: Engine,
    P: WaterPump,
{
    /// Create a controller with default settings
    pub fn new(detector: D, engine: E, pump: P) -> Self {
        Self {
            detector,
            engine,
            pump,
            settings: WashSettings::default(),
        }
    }

    /// Create a controller with custom settings
    pub fn with_settings(
        detector: D,
        engine: E,
        pump: P,
        settings: WashSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            detector,
            engine,
            pump,
            settings,
        })
    }

    pub fn settings(&self) -> &WashSettings {
        &self.settings
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn pump(&self) -> &P {
        &self.pump
    }

    /// Consume the controller and return the collaborators
    pub fn into_parts(self) -> (D, E, P) {
        (self.detector, self.engine, self.pump)
    }

    /// Run a wash request
    ///
    /// The only refusal is [`ErrorCode::TooHeavy`], reported in the status
    /// before any collaborator is called. On success every planned step
    /// has been executed exactly once, in order.
    pub fn start(
        &mut self,
        batch: LaundryBatch,
        configuration: ProgramConfiguration,
    ) -> LaundryStatus {
        if let Err(error) = self.check_batch(&batch) {
            return LaundryStatus::failure(error);
        }

        let program = self.resolve_program(&batch, &configuration);
        let plan = WashPlan::new(&batch, program, configuration.spin());

        if configuration.spin() && !plan.spins() {
            debug!("Spin suppressed for {:?} batch", batch.material());
        }

        info!(
            "Running {:?} for {} kg ({} min)",
            program,
            batch.weight_kg(),
            plan.total_minutes()
        );

        self.execute(&plan);

        LaundryStatus::success(program)
    }

    /// Check that the machine can take `batch`
    pub fn check_batch(&self, batch: &LaundryBatch) -> Result<(), ErrorCode> {
        if batch.weight_kg() > self.settings.max_weight_kg {
            warn!(
                "Batch of {} kg exceeds the {} kg limit",
                batch.weight_kg(),
                self.settings.max_weight_kg
            );
            return Err(ErrorCode::TooHeavy);
        }
        Ok(())
    }

    /// Pick the program that will actually run
    ///
    /// Only `Autodetect` consults the dirt detector. A degree equal to the
    /// threshold counts as average and selects `Medium`.
    pub fn resolve_program(
        &mut self,
        batch: &LaundryBatch,
        configuration: &ProgramConfiguration,
    ) -> Program {
        let requested = configuration.program();
        if !requested.is_autodetect() {
            return requested;
        }

        let degree = self.detector.detect_dirt_degree(batch);
        let program = if degree > self.settings.average_degree {
            Program::Long
        } else {
            Program::Medium
        };

        debug!("Detected dirt degree {}, selected {:?}", degree, program);
        program
    }

    fn execute(&mut self, plan: &WashPlan) {
        for step in plan.steps() {
            trace!("Step {:?}", step);
            match *step {
                Step::Pour { weight_kg } => self.pump.pour(weight_kg),
                Step::RunWashing { minutes } => self.engine.run_washing(minutes),
                Step::Spin => self.engine.spin(),
                Step::Release => self.pump.release(),
            }
        }
    }
}

//! Recording collaborator doubles for unit tests

use core::cell::RefCell;

use crate::laundry::{LaundryBatch, Percentage};
use crate::traits::{DirtDetector, Engine, WaterPump};

/// A collaborator call, as seen by the doubles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    DetectDirt { weight_kg: f32 },
    Pour { weight_kg: f32 },
    RunWashing { minutes: u16 },
    Spin,
    Release,
}

/// Shared, ordered log of every call made to the doubles
#[derive(Debug, Default)]
pub struct CallLog {
    calls: RefCell<Vec<Call>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matches(c)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

/// Detector that always reports the same degree
pub struct FixedDetector<'a> {
    log: &'a CallLog,
    degree: Percentage,
}

impl<'a> FixedDetector<'a> {
    pub fn new(log: &'a CallLog, degree: u8) -> Self {
        Self {
            log,
            degree: Percentage::saturating(degree),
        }
    }
}

impl DirtDetector for FixedDetector<'_> {
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage {
        self.log.record(Call::DetectDirt {
            weight_kg: batch.weight_kg(),
        });
        self.degree
    }
}

pub struct RecordingEngine<'a> {
    log: &'a CallLog,
}

impl<'a> RecordingEngine<'a> {
    pub fn new(log: &'a CallLog) -> Self {
        Self { log }
    }
}

impl Engine for RecordingEngine<'_> {
    fn run_washing(&mut self, minutes: u16) {
        self.log.record(Call::RunWashing { minutes });
    }

    fn spin(&mut self) {
        self.log.record(Call::Spin);
    }
}

pub struct RecordingPump<'a> {
    log: &'a CallLog,
}

impl<'a> RecordingPump<'a> {
    pub fn new(log: &'a CallLog) -> Self {
        Self { log }
    }
}

impl WaterPump for RecordingPump<'_> {
    fn pour(&mut self, weight_kg: f32) {
        self.log.record(Call::Pour { weight_kg });
    }

    fn release(&mut self) {
        self.log.record(Call::Release);
    }
}

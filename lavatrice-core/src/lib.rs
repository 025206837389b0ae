//! Board-agnostic control core for the washing machine
//!
//! This crate contains the wash decision logic that does not depend on
//! specific hardware implementations:
//!
//! - Laundry value types (batch, program, dirt percentage, status)
//! - Collaborator traits (dirt detector, engine, water pump)
//! - Machine settings and their persisted image
//! - Wash plan generation
//! - The washing machine controller that ties them together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod config;
pub mod laundry;
pub mod machine;
pub mod plan;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::{WashSettings, AVERAGE_DEGREE, MAX_WEIGHT_KG};
pub use laundry::{
    ErrorCode, LaundryBatch, LaundryStatus, Material, Percentage, Program, ProgramConfiguration,
    WashResult,
};
pub use machine::WashingMachine;
pub use traits::{DirtDetector, Engine, WaterPump};

//! Washing machine controller
//!
//! Validates a batch, resolves the program, and drives the collaborators
//! through the wash plan.

pub mod washer;

pub use washer::WashingMachine;

//! Wash plan generation
//!
//! Turns a resolved program into the ordered list of collaborator steps
//! a run performs. Planning is pure; the controller executes the plan.

pub mod step;

pub use step::{should_spin, Step, WashPlan, MAX_STEPS};

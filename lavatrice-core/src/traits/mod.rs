//! Collaborator traits
//!
//! These traits define the interface between the wash logic and the
//! sensor and actuators of a concrete machine.

pub mod dirt;
pub mod engine;
pub mod pump;

pub use dirt::DirtDetector;
pub use engine::Engine;
pub use pump::WaterPump;

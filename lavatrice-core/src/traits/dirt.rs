//! Dirt detection sensor trait

use crate::laundry::{LaundryBatch, Percentage};

/// Trait for dirt detection sensors
///
/// Only consulted when the requested program is `Autodetect`.
pub trait DirtDetector {
    /// Estimate how soiled a batch is
    ///
    /// Takes `&mut self` because a reading usually drives the sensor.
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage;
}

impl<T: DirtDetector + ?Sized> DirtDetector for &mut T {
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage {
        (**self).detect_dirt_degree(batch)
    }
}

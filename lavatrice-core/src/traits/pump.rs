//! Water pump trait

/// Trait for the water pump
pub trait WaterPump {
    /// Fill the drum with enough water for `weight_kg` of laundry
    fn pour(&mut self, weight_kg: f32);

    /// Drain the drum
    fn release(&mut self);
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn pour(&mut self, weight_kg: f32) {
        (**self).pour(weight_kg)
    }

    fn release(&mut self) {
        (**self).release()
    }
}

//! Drum engine trait

/// Trait for the drum engine
///
/// Both calls block until the engine has finished.
pub trait Engine {
    /// Turn the drum for a full wash cycle
    fn run_washing(&mut self, minutes: u16);

    /// Spin the drum to shed water after washing
    fn spin(&mut self);
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_washing(&mut self, minutes: u16) {
        (**self).run_washing(minutes)
    }

    fn spin(&mut self) {
        (**self).spin()
    }
}

//! Hooks for watching register traffic.

use crate::{ConfigSnapshot, Register};

/// Receives register traffic and config dumps from an [`Ads1115`](crate::Ads1115).
///
/// Every method defaults to doing nothing. `()` is the observer a new driver
/// starts with; install another one with
/// [`with_observer`](crate::Ads1115::with_observer).
pub trait Observer {
    /// A register read completed.
    fn register_read(&mut self, _reg: Register, _value: u16) {}

    /// A register write completed.
    fn register_written(&mut self, _reg: Register, _value: u16) {}

    /// [`show_config_register`](crate::Ads1115::show_config_register) decoded the Config register.
    fn config_dump(&mut self, _snapshot: &ConfigSnapshot) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn register_read(&mut self, reg: Register, value: u16) {
        (**self).register_read(reg, value)
    }

    fn register_written(&mut self, reg: Register, value: u16) {
        (**self).register_written(reg, value)
    }

    fn config_dump(&mut self, snapshot: &ConfigSnapshot) {
        (**self).config_dump(snapshot)
    }
}

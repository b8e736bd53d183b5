//! Provides a driver for a Texas Instruments ADS1115 16-bit ADC via the `embedded-hal` ecosystem.
//!
//! The driver keeps a shadow copy of the Config register. Every field setter
//! edits the shadow, and most of them write it straight back to the device.
//! The comparator mode, polarity and latch setters only touch the shadow;
//! their bits reach the device with the next write-through setter or
//! conversion trigger.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, I2c};

pub mod config;
pub mod driver;
pub mod observer;
pub mod register;
pub mod settings;

pub use config::{
    Address, ComparatorLatch, ComparatorMode, ComparatorPolarity, ComparatorQueue, ConfigSnapshot,
    DataRate, Gain, Mode, Mux,
};
pub use driver::Ads1115;
pub use observer::Observer;
pub use register::Register;
pub use settings::Settings;

/// Driver error type
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// An error with the underlying I2C bus
    Bus(E),
    /// Polling ran out of retries before the device reported an idle converter
    NotReady,
}

impl<E: embedded_hal::i2c::Error> Error<E> {
    /// Bus error category, if this came from the bus.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Bus(e) => Some(e.kind()),
            Error::NotReady => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "i2c bus error: {e:?}"),
            Error::NotReady => f.write_str("conversion not ready"),
        }
    }
}

/// Internal method for reading a 16-bit register: pointer write, pause, two byte read.
pub(crate) fn read_register<I2C: I2c, D: DelayNs>(
    i2c: &mut I2C,
    delay: &mut D,
    addr: u8,
    reg: Register,
    pause_us: u32,
) -> Result<u16, I2C::Error> {
    i2c.write(addr, &[reg.addr()])?;

    delay.delay_us(pause_us);

    let mut buffer = [0; 2];
    i2c.read(addr, &mut buffer)?;

    Ok(u16::from_be_bytes(buffer))
}

/// Internal method for writing a 16-bit register in a single transaction.
pub(crate) fn write_register<I2C: I2c>(
    i2c: &mut I2C,
    addr: u8,
    reg: Register,
    value: u16,
) -> Result<(), I2C::Error> {
    let [msb, lsb] = value.to_be_bytes();
    i2c.write(addr, &[reg.addr(), msb, lsb])
}

#[cfg(test)]
pub(crate) mod mock;

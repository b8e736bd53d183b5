//! Timing and polling knobs.

/// Polling and timing behaviour of an [`Ads1115`](crate::Ads1115).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Ready checks made by [`get_conversion`](crate::Ads1115::get_conversion) after a trigger.
    pub poll_retries: u16,
    /// Pause between ready checks, in microseconds. Zero busy-polls.
    pub poll_interval_us: u32,
    /// Pause between the pointer write and the data read of a register read, in microseconds.
    pub register_delay_us: u32,
    /// Return [`Error::NotReady`](crate::Error::NotReady) instead of reading
    /// a possibly stale sample when polling runs out of retries.
    pub strict_polling: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_retries: 1000,
            poll_interval_us: 0,
            register_delay_us: 1000,
            strict_polling: false,
        }
    }
}

impl Settings {
    /// Set the retry budget.
    pub const fn with_poll_retries(mut self, retries: u16) -> Self {
        self.poll_retries = retries;
        self
    }

    /// Set the pause between ready checks.
    pub const fn with_poll_interval_us(mut self, us: u32) -> Self {
        self.poll_interval_us = us;
        self
    }

    /// Set the register read pause.
    pub const fn with_register_delay_us(mut self, us: u32) -> Self {
        self.register_delay_us = us;
        self
    }

    /// Enable or disable strict polling.
    pub const fn with_strict_polling(mut self, strict: bool) -> Self {
        self.strict_polling = strict;
        self
    }
}

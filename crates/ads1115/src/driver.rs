use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::register::{self, Register, CONFIG_RESET};
use crate::{
    read_register, write_register, Address, ComparatorLatch, ComparatorMode, ComparatorPolarity,
    ComparatorQueue, ConfigSnapshot, DataRate, Error, Gain, Mode, Mux, Observer, Settings,
};

/// ADS1115 driver
pub struct Ads1115<I2C, D, O = ()> {
    i2c: I2C,
    delay: D,
    observer: O,
    settings: Settings,
    addr: u8,
    config: u16,
    mux: Mux,
    gain: Gain,
    mode: Mode,
}

impl<I2C: I2c, D: DelayNs> Ads1115<I2C, D> {
    /// Creates a new driver for the device strapped to `addr`.
    ///
    /// Nothing is sent on the bus. The shadow state starts at the power-on
    /// defaults; call [`initialize`](Self::initialize) to push them to the device.
    pub fn new(i2c: I2C, delay: D, addr: Address) -> Self {
        Self::new_raw(i2c, delay, addr.into_addr())
    }

    /// Creates a new driver for a raw 7-bit address.
    pub fn new_raw(i2c: I2C, delay: D, addr: u8) -> Self {
        Self {
            i2c,
            delay,
            observer: (),
            settings: Settings::default(),
            addr,
            config: CONFIG_RESET,
            mux: Mux::default(),
            gain: Gain::default(),
            mode: Mode::default(),
        }
    }
}

impl<I2C: I2c, D: DelayNs, O: Observer> Ads1115<I2C, D, O> {
    /// Replace the observer that is told about register traffic.
    pub fn with_observer<P: Observer>(self, observer: P) -> Ads1115<I2C, D, P> {
        Ads1115 {
            i2c: self.i2c,
            delay: self.delay,
            observer,
            settings: self.settings,
            addr: self.addr,
            config: self.config,
            mux: self.mux,
            gain: self.gain,
            mode: self.mode,
        }
    }

    /// Replace the polling and timing settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Current polling and timing settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 7-bit device address.
    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Last value written to, or staged for, the Config register.
    pub fn config_shadow(&self) -> u16 {
        self.config
    }

    /// Multiplexer setting the driver believes is active.
    pub fn tracked_mux(&self) -> Mux {
        self.mux
    }

    /// Gain setting the driver believes is active.
    pub fn tracked_gain(&self) -> Gain {
        self.gain
    }

    /// Conversion mode the driver believes is active.
    pub fn tracked_mode(&self) -> Mode {
        self.mode
    }

    /// Give back the I2C bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Read a 16-bit register.
    pub fn read_register(&mut self, reg: Register) -> Result<u16, Error<I2C::Error>> {
        let value = read_register(
            &mut self.i2c,
            &mut self.delay,
            self.addr,
            reg,
            self.settings.register_delay_us,
        )
        .map_err(Error::Bus)?;
        self.observer.register_read(reg, value);
        Ok(value)
    }

    /// Write a 16-bit register.
    pub fn write_register(&mut self, reg: Register, value: u16) -> Result<(), Error<I2C::Error>> {
        write_register(&mut self.i2c, self.addr, reg, value).map_err(Error::Bus)?;
        self.observer.register_written(reg, value);
        Ok(())
    }

    fn write_config(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register(Register::Config, self.config)
    }

    fn read_field(&mut self, field: register::Field) -> Result<u8, Error<I2C::Error>> {
        let value = self.read_register(Register::Config)?;
        Ok(field.get(value))
    }

    /// Power on and prepare for general usage.
    ///
    /// The device comes up ready to use, so this only restores the
    /// defaults: single-shot mode, P0/N1 mux, 2.048V gain, 128 samples/sec,
    /// hysteresis comparator, active-low, non-latching, comparator disabled.
    pub fn initialize(&mut self) -> Result<(), Error<I2C::Error>> {
        self.config = 0;
        self.set_multiplexer(Mux::P0N1)?;
        self.set_gain(Gain::V2_048)?;
        self.set_mode(Mode::SingleShot)?;
        self.set_rate(DataRate::Sps128)?;
        self.set_comparator_mode(ComparatorMode::Hysteresis);
        self.set_comparator_polarity(ComparatorPolarity::ActiveLow);
        self.set_comparator_latch_enabled(ComparatorLatch::NonLatching);
        self.set_comparator_queue_mode(ComparatorQueue::Disabled)
    }

    /// Verify the device acknowledges its address.
    pub fn test_connection(&mut self) -> bool {
        self.i2c.write(self.addr, &[]).is_ok()
    }

    /// Poll the OS bit until the conversion is finished, at most `max_retries` times.
    ///
    /// Returns `Ok(false)` if the device was still busy on every attempt.
    pub fn poll_conversion(&mut self, max_retries: u16) -> Result<bool, Error<I2C::Error>> {
        for attempt in 0..max_retries {
            if attempt > 0 && self.settings.poll_interval_us > 0 {
                self.delay.delay_us(self.settings.poll_interval_us);
            }
            if self.is_conversion_ready()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Start a single-shot conversion.
    ///
    /// Only has an effect while the device is powered down, but the write is
    /// sent regardless.
    pub fn trigger_conversion(&mut self) -> Result<(), Error<I2C::Error>> {
        self.config = register::OS.set(self.config, 1);
        self.write_config()
    }

    /// Read the Conversion register.
    ///
    /// In single-shot mode the register only holds fresh data after a
    /// trigger. With `trigger_and_poll` set (and only in single-shot mode) a
    /// conversion is triggered and polled for first. Unless
    /// [`Settings::strict_polling`] is set, running out of poll retries is
    /// ignored and whatever the register holds is returned.
    pub fn get_conversion(&mut self, trigger_and_poll: bool) -> Result<i16, Error<I2C::Error>> {
        if trigger_and_poll && self.mode == Mode::SingleShot {
            self.trigger_conversion()?;
            let ready = self.poll_conversion(self.settings.poll_retries)?;
            if !ready && self.settings.strict_polling {
                return Err(Error::NotReady);
            }
        }

        let raw = self.read_register(Register::Conversion)?;
        Ok(raw as i16)
    }

    /// Switch the multiplexer to `mux` if needed, then trigger and read a conversion.
    pub fn get_conversion_for(&mut self, mux: Mux) -> Result<i16, Error<I2C::Error>> {
        if self.mux != mux {
            self.set_multiplexer(mux)?;
        }
        self.get_conversion(true)
    }

    /// AIN0/AIN1 differential.
    pub fn get_conversion_p0_n1(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.get_conversion_for(Mux::P0N1)
    }

    /// AIN0/AIN3 differential.
    pub fn get_conversion_p0_n3(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.get_conversion_for(Mux::P0N3)
    }

    /// AIN1/AIN3 differential.
    pub fn get_conversion_p1_n3(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.get_conversion_for(Mux::P1N3)
    }

    /// AIN2/AIN3 differential.
    pub fn get_conversion_p2_n3(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.get_conversion_for(Mux::P2N3)
    }

    /// AIN0 against ground.
    pub fn get_conversion_p0_gnd(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.get_conversion_for(Mux::P0Gnd)
    }

    /// AIN1 against ground.
    pub fn get_conversion_p1_gnd(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.get_conversion_for(Mux::P1Gnd)
    }

    /// AIN2 against ground.
    pub fn get_conversion_p2_gnd(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.get_conversion_for(Mux::P2Gnd)
    }

    /// AIN3 against ground.
    pub fn get_conversion_p3_gnd(&mut self) -> Result<i16, Error<I2C::Error>> {
        self.get_conversion_for(Mux::P3Gnd)
    }

    /// Read a conversion and scale it by the tracked gain.
    pub fn get_milli_volts(&mut self, trigger_and_poll: bool) -> Result<f32, Error<I2C::Error>> {
        let reading = self.get_conversion(trigger_and_poll)?;
        Ok(f32::from(reading) * self.get_mv_per_count())
    }

    /// Millivolts per count for the tracked gain.
    ///
    /// Useful for scaling an average of several raw readings with a single multiply.
    pub fn get_mv_per_count(&self) -> f32 {
        self.gain.mv_per_count()
    }

    /// Full-scale range of `gain` in millivolts.
    pub fn get_full_scale(&self, gain: Gain) -> u16 {
        gain.full_scale_mv()
    }

    /// `true` when no conversion is in progress.
    pub fn is_conversion_ready(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_field(register::OS)? != 0)
    }

    /// Read the multiplexer setting from the device.
    pub fn get_multiplexer(&mut self) -> Result<Mux, Error<I2C::Error>> {
        self.mux = Mux::from_bits(self.read_field(register::MUX)?);
        Ok(self.mux)
    }

    /// Set the multiplexer.
    ///
    /// A running continuous conversion can fill the Conversion register
    /// before the new setting takes effect, so in continuous mode the
    /// conversion is stopped and restarted around one discarded sample.
    pub fn set_multiplexer(&mut self, mux: Mux) -> Result<(), Error<I2C::Error>> {
        self.config = register::MUX.set(self.config, mux.bits());
        self.write_config()?;
        self.mux = mux;
        self.restart_continuous()
    }

    /// Read the gain setting from the device.
    pub fn get_gain(&mut self) -> Result<Gain, Error<I2C::Error>> {
        self.gain = Gain::from_bits(self.read_field(register::PGA)?);
        Ok(self.gain)
    }

    /// Set the gain. Restarts a continuous conversion like [`set_multiplexer`](Self::set_multiplexer).
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), Error<I2C::Error>> {
        self.config = register::PGA.set(self.config, gain.bits());
        self.write_config()?;
        self.gain = gain;
        self.restart_continuous()
    }

    fn restart_continuous(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.mode == Mode::Continuous {
            self.set_mode(Mode::SingleShot)?;
            // Flushed sample is discarded, so a poll timeout is not an error here.
            self.trigger_conversion()?;
            self.poll_conversion(self.settings.poll_retries)?;
            self.read_register(Register::Conversion)?;
            self.set_mode(Mode::Continuous)?;
        }
        Ok(())
    }

    /// Read the conversion mode from the device.
    pub fn get_mode(&mut self) -> Result<Mode, Error<I2C::Error>> {
        self.mode = Mode::from_bits(self.read_field(register::MODE)?);
        Ok(self.mode)
    }

    /// Set the conversion mode.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<I2C::Error>> {
        self.config = register::MODE.set(self.config, mode.bits());
        self.write_config()?;
        self.mode = mode;
        Ok(())
    }

    /// Read the data rate from the device.
    pub fn get_rate(&mut self) -> Result<DataRate, Error<I2C::Error>> {
        Ok(DataRate::from_bits(self.read_field(register::DR)?))
    }

    /// Set the data rate.
    pub fn set_rate(&mut self, rate: DataRate) -> Result<(), Error<I2C::Error>> {
        self.config = register::DR.set(self.config, rate.bits());
        self.write_config()
    }

    /// Read the comparator mode from the device.
    pub fn get_comparator_mode(&mut self) -> Result<ComparatorMode, Error<I2C::Error>> {
        Ok(ComparatorMode::from_bits(self.read_field(register::COMP_MODE)?))
    }

    /// Stage the comparator mode. Shadow only, nothing is written.
    pub fn set_comparator_mode(&mut self, mode: ComparatorMode) {
        self.config = register::COMP_MODE.set(self.config, mode.bits());
    }

    /// Read the comparator polarity from the device.
    pub fn get_comparator_polarity(&mut self) -> Result<ComparatorPolarity, Error<I2C::Error>> {
        Ok(ComparatorPolarity::from_bits(self.read_field(register::COMP_POL)?))
    }

    /// Stage the comparator polarity. Shadow only, nothing is written.
    pub fn set_comparator_polarity(&mut self, polarity: ComparatorPolarity) {
        self.config = register::COMP_POL.set(self.config, polarity.bits());
    }

    /// Read the comparator latch setting from the device.
    pub fn get_comparator_latch_enabled(&mut self) -> Result<ComparatorLatch, Error<I2C::Error>> {
        Ok(ComparatorLatch::from_bits(self.read_field(register::COMP_LAT)?))
    }

    /// Stage the comparator latch setting. Shadow only, nothing is written.
    pub fn set_comparator_latch_enabled(&mut self, latch: ComparatorLatch) {
        self.config = register::COMP_LAT.set(self.config, latch.bits());
    }

    /// Read the comparator queue setting from the device.
    pub fn get_comparator_queue_mode(&mut self) -> Result<ComparatorQueue, Error<I2C::Error>> {
        Ok(ComparatorQueue::from_bits(self.read_field(register::COMP_QUE)?))
    }

    /// Set the comparator queue.
    pub fn set_comparator_queue_mode(
        &mut self,
        queue: ComparatorQueue,
    ) -> Result<(), Error<I2C::Error>> {
        self.config = register::COMP_QUE.set(self.config, queue.bits());
        self.write_config()
    }

    /// Read the comparator low threshold.
    pub fn get_low_threshold(&mut self) -> Result<i16, Error<I2C::Error>> {
        Ok(self.read_register(Register::LoThresh)? as i16)
    }

    /// Set the comparator low threshold.
    pub fn set_low_threshold(&mut self, threshold: i16) -> Result<(), Error<I2C::Error>> {
        self.write_register(Register::LoThresh, threshold as u16)
    }

    /// Read the comparator high threshold.
    pub fn get_high_threshold(&mut self) -> Result<i16, Error<I2C::Error>> {
        Ok(self.read_register(Register::HiThresh)? as i16)
    }

    /// Set the comparator high threshold.
    pub fn set_high_threshold(&mut self, threshold: i16) -> Result<(), Error<I2C::Error>> {
        self.write_register(Register::HiThresh, threshold as u16)
    }

    /// Configure ALERT/RDY as a conversion ready signal.
    ///
    /// Sets the MSB of the high threshold and clears the MSB of the low
    /// threshold, then sets active-low polarity and disables the comparator
    /// queue. The pin needs a pull-up.
    pub fn set_conversion_ready_pin_mode(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_high_threshold(-1)?;
        self.set_low_threshold(0)?;
        self.set_comparator_polarity(ComparatorPolarity::ActiveLow);
        self.set_comparator_queue_mode(ComparatorQueue::Disabled)
    }

    /// Read the Config register, decode it and hand it to the observer.
    pub fn show_config_register(&mut self) -> Result<ConfigSnapshot, Error<I2C::Error>> {
        let value = self.read_register(Register::Config)?;
        let snapshot = ConfigSnapshot::decode(value);
        self.observer.config_dump(&snapshot);
        Ok(snapshot)
    }
}

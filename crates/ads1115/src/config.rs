//! Typed values for every field of the Config register.

use core::fmt;

use crate::register::{COMP_LAT, COMP_MODE, COMP_POL, COMP_QUE, DR, MODE, MUX, OS, PGA};

/// The ADDR pin strap selects one of four 7-bit addresses.
///
/// | ADDR tied to | Address |
/// | :---         | :---    |
/// | GND          | `0x48`  |
/// | VDD          | `0x49`  |
/// | SDA          | `0x4A`  |
/// | SCL          | `0x4B`  |
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    /// ADDR pin low
    #[default]
    Gnd,
    /// ADDR pin high
    Vdd,
    /// ADDR pin tied to SDA
    Sda,
    /// ADDR pin tied to SCL
    Scl,
}

impl Address {
    /// Convert into the right-aligned 7-bit address
    pub const fn into_addr(self) -> u8 {
        match self {
            Address::Gnd => 0x48,
            Address::Vdd => 0x49,
            Address::Sda => 0x4A,
            Address::Scl => 0x4B,
        }
    }

    /// Iterate over all straps.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Gnd, Self::Vdd, Self::Sda, Self::Scl].into_iter()
    }
}

/// Input multiplexer: which pins feed the positive and negative inputs.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mux {
    /// AIN0 / AIN1
    #[default]
    P0N1,
    /// AIN0 / AIN3
    P0N3,
    /// AIN1 / AIN3
    P1N3,
    /// AIN2 / AIN3
    P2N3,
    /// AIN0 / GND
    P0Gnd,
    /// AIN1 / GND
    P1Gnd,
    /// AIN2 / GND
    P2Gnd,
    /// AIN3 / GND
    P3Gnd,
}

impl Mux {
    /// Field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field value. Extra high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Mux::P0N1,
            1 => Mux::P0N3,
            2 => Mux::P1N3,
            3 => Mux::P2N3,
            4 => Mux::P0Gnd,
            5 => Mux::P1Gnd,
            6 => Mux::P2Gnd,
            _ => Mux::P3Gnd,
        }
    }

    /// Single-ended input `AINn` against ground. `None` past AIN3.
    pub const fn single_ended(channel: u8) -> Option<Self> {
        match channel {
            0 => Some(Mux::P0Gnd),
            1 => Some(Mux::P1Gnd),
            2 => Some(Mux::P2Gnd),
            3 => Some(Mux::P3Gnd),
            _ => None,
        }
    }
}

/// Programmable gain amplifier setting, named by full-scale range in volts.
///
/// The three 0.256V selectors are aliases of one another.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Gain {
    /// +/-6.144V
    V6_144,
    /// +/-4.096V
    V4_096,
    /// +/-2.048V
    #[default]
    V2_048,
    /// +/-1.024V
    V1_024,
    /// +/-0.512V
    V0_512,
    /// +/-0.256V
    V0_256,
    /// +/-0.256V, alias
    V0_256B,
    /// +/-0.256V, alias
    V0_256C,
}

impl Gain {
    /// Field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field value. Extra high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Gain::V6_144,
            1 => Gain::V4_096,
            2 => Gain::V2_048,
            3 => Gain::V1_024,
            4 => Gain::V0_512,
            5 => Gain::V0_256,
            6 => Gain::V0_256B,
            _ => Gain::V0_256C,
        }
    }

    /// Full-scale range in millivolts.
    pub const fn full_scale_mv(self) -> u16 {
        match self {
            Gain::V6_144 => 6144,
            Gain::V4_096 => 4096,
            Gain::V2_048 => 2048,
            Gain::V1_024 => 1024,
            Gain::V0_512 => 512,
            Gain::V0_256 | Gain::V0_256B | Gain::V0_256C => 256,
        }
    }

    /// Millivolts represented by one count of the conversion register.
    pub const fn mv_per_count(self) -> f32 {
        match self {
            Gain::V6_144 => 0.187500,
            Gain::V4_096 => 0.125000,
            Gain::V2_048 => 0.062500,
            Gain::V1_024 => 0.031250,
            Gain::V0_512 => 0.015625,
            Gain::V0_256 | Gain::V0_256B | Gain::V0_256C => 0.007813,
        }
    }

    /// Iterate over all eight selectors.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self::from_bits)
    }
}

/// Conversion mode.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Convert back to back
    Continuous,
    /// Convert once per trigger, then power down
    #[default]
    SingleShot,
}

impl Mode {
    /// Field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field value. Extra high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 1 == 0 {
            Mode::Continuous
        } else {
            Mode::SingleShot
        }
    }
}

/// Samples per second.
#[allow(missing_docs)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DataRate {
    Sps8,
    Sps16,
    Sps32,
    Sps64,
    #[default]
    Sps128,
    Sps250,
    Sps475,
    Sps860,
}

impl DataRate {
    /// Field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field value. Extra high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => DataRate::Sps8,
            1 => DataRate::Sps16,
            2 => DataRate::Sps32,
            3 => DataRate::Sps64,
            4 => DataRate::Sps128,
            5 => DataRate::Sps250,
            6 => DataRate::Sps475,
            _ => DataRate::Sps860,
        }
    }

    /// Nominal samples per second.
    pub const fn samples_per_second(self) -> u16 {
        match self {
            DataRate::Sps8 => 8,
            DataRate::Sps16 => 16,
            DataRate::Sps32 => 32,
            DataRate::Sps64 => 64,
            DataRate::Sps128 => 128,
            DataRate::Sps250 => 250,
            DataRate::Sps475 => 475,
            DataRate::Sps860 => 860,
        }
    }
}

/// Comparator mode.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorMode {
    /// Traditional comparator with hysteresis
    #[default]
    Hysteresis,
    /// Window comparator
    Window,
}

impl ComparatorMode {
    /// Field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field value. Extra high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 1 == 0 {
            ComparatorMode::Hysteresis
        } else {
            ComparatorMode::Window
        }
    }
}

/// Level of the ALERT/RDY pin when asserted.
#[allow(missing_docs)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorPolarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

impl ComparatorPolarity {
    /// Field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field value. Extra high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 1 == 0 {
            ComparatorPolarity::ActiveLow
        } else {
            ComparatorPolarity::ActiveHigh
        }
    }
}

/// Whether an asserted ALERT/RDY pin stays asserted until read.
#[allow(missing_docs)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorLatch {
    #[default]
    NonLatching,
    Latching,
}

impl ComparatorLatch {
    /// Field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field value. Extra high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 1 == 0 {
            ComparatorLatch::NonLatching
        } else {
            ComparatorLatch::Latching
        }
    }
}

/// Consecutive threshold violations before ALERT/RDY asserts, or disabled.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorQueue {
    /// Assert after one conversion
    Assert1,
    /// Assert after two conversions
    Assert2,
    /// Assert after four conversions
    Assert4,
    /// Comparator off, ALERT/RDY high impedance
    #[default]
    Disabled,
}

impl ComparatorQueue {
    /// Field encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field value. Extra high bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => ComparatorQueue::Assert1,
            1 => ComparatorQueue::Assert2,
            2 => ComparatorQueue::Assert4,
            _ => ComparatorQueue::Disabled,
        }
    }
}

/// Every field of one Config register value.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSnapshot {
    /// OS bit. On read, set when no conversion is in progress.
    pub ready: bool,
    /// MUX field
    pub mux: Mux,
    /// PGA field
    pub gain: Gain,
    /// MODE field
    pub mode: Mode,
    /// DR field
    pub rate: DataRate,
    /// COMP_MODE field
    pub comparator_mode: ComparatorMode,
    /// COMP_POL field
    pub comparator_polarity: ComparatorPolarity,
    /// COMP_LAT field
    pub comparator_latch: ComparatorLatch,
    /// COMP_QUE field
    pub comparator_queue: ComparatorQueue,
}

impl ConfigSnapshot {
    /// Split a raw Config word into its fields.
    pub const fn decode(word: u16) -> Self {
        Self {
            ready: OS.get(word) != 0,
            mux: Mux::from_bits(MUX.get(word)),
            gain: Gain::from_bits(PGA.get(word)),
            mode: Mode::from_bits(MODE.get(word)),
            rate: DataRate::from_bits(DR.get(word)),
            comparator_mode: ComparatorMode::from_bits(COMP_MODE.get(word)),
            comparator_polarity: ComparatorPolarity::from_bits(COMP_POL.get(word)),
            comparator_latch: ComparatorLatch::from_bits(COMP_LAT.get(word)),
            comparator_queue: ComparatorQueue::from_bits(COMP_QUE.get(word)),
        }
    }

    /// Pack the fields back into a Config word.
    pub const fn encode(&self) -> u16 {
        let mut word = OS.set(0, self.ready as u8);
        word = MUX.set(word, self.mux.bits());
        word = PGA.set(word, self.gain.bits());
        word = MODE.set(word, self.mode.bits());
        word = DR.set(word, self.rate.bits());
        word = COMP_MODE.set(word, self.comparator_mode.bits());
        word = COMP_POL.set(word, self.comparator_polarity.bits());
        word = COMP_LAT.set(word, self.comparator_latch.bits());
        COMP_QUE.set(word, self.comparator_queue.bits())
    }
}

impl fmt::Display for ConfigSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Register is:\t{:016b}", self.encode())?;
        writeln!(f, "OS:\t{}", self.ready as u8)?;
        writeln!(f, "MUX:\t{:03b}", self.mux.bits())?;
        writeln!(f, "PGA:\t{:03b}", self.gain.bits())?;
        writeln!(f, "MODE:\t{}", self.mode.bits())?;
        writeln!(f, "DR:\t{:03b}", self.rate.bits())?;
        writeln!(f, "CMP_MODE:\t{}", self.comparator_mode.bits())?;
        writeln!(f, "CMP_POL:\t{}", self.comparator_polarity.bits())?;
        writeln!(f, "CMP_LAT:\t{}", self.comparator_latch.bits())?;
        write!(f, "CMP_QUE:\t{:02b}", self.comparator_queue.bits())
    }
}

//! Register map and the bitfield layout of the Config register.

/// Register pointer values.
#[allow(missing_docs)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    Conversion = 0x00,
    Config = 0x01,
    LoThresh = 0x02,
    HiThresh = 0x03,
}

impl Register {
    /// Pointer byte sent ahead of every access.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// A contiguous bitfield inside the 16-bit Config register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Bits occupied by the field, in place.
    pub mask: u16,
    /// Position of the least significant bit.
    pub shift: u8,
    /// Number of bits.
    pub width: u8,
}

impl Field {
    const fn new(shift: u8, width: u8) -> Self {
        Self {
            mask: ((1u16 << width) - 1) << shift,
            shift,
            width,
        }
    }

    /// Pull the field out of `word`, right aligned.
    pub const fn get(self, word: u16) -> u8 {
        ((word & self.mask) >> self.shift) as u8
    }

    /// Replace the field in `word` with `value`, leaving every other bit alone.
    ///
    /// `value` is truncated to the field width.
    pub const fn set(self, word: u16, value: u8) -> u16 {
        (word & !self.mask) | (((value as u16) << self.shift) & self.mask)
    }
}

/// Operational status. Write 1 to start a single-shot conversion, reads 1 when idle.
pub const OS: Field = Field::new(15, 1);
/// Input multiplexer.
pub const MUX: Field = Field::new(12, 3);
/// Programmable gain amplifier.
pub const PGA: Field = Field::new(9, 3);
/// Continuous (0) or single-shot (1).
pub const MODE: Field = Field::new(8, 1);
/// Data rate.
pub const DR: Field = Field::new(5, 3);
/// Comparator mode.
pub const COMP_MODE: Field = Field::new(4, 1);
/// Comparator polarity.
pub const COMP_POL: Field = Field::new(3, 1);
/// Latching comparator.
pub const COMP_LAT: Field = Field::new(2, 1);
/// Comparator queue and disable.
pub const COMP_QUE: Field = Field::new(0, 2);

/// Every field, most significant first.
pub const FIELDS: [Field; 9] = [OS, MUX, PGA, MODE, DR, COMP_MODE, COMP_POL, COMP_LAT, COMP_QUE];

/// Config register contents after a power-on reset.
pub const CONFIG_RESET: u16 = 0x8583;

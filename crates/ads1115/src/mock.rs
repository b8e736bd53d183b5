//! Trait doubles shared by the unit tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// One bus operation as seen by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Write(u8, Vec<u8>),
    Read(u8, usize),
}

/// Register file that echoes writes back on reads.
///
/// The OS bit of Config reads back set once `busy_reads` Config reads have
/// reported a conversion in progress.
#[derive(Debug)]
pub struct RegisterFile {
    pub regs: [u16; 4],
    pub pointer: u8,
    pub busy_reads: usize,
    pub fail: bool,
    pub ops: Vec<Op>,
}

impl RegisterFile {
    /// Device that is never busy.
    pub fn ready() -> Self {
        Self {
            regs: [0, 0x8583, 0x8000, 0x7FFF],
            pointer: 0,
            busy_reads: 0,
            fail: false,
            ops: Vec::new(),
        }
    }

    /// Device that never finishes a conversion.
    pub fn stuck() -> Self {
        Self {
            busy_reads: usize::MAX,
            ..Self::ready()
        }
    }

    pub fn with_conversion(mut self, raw: i16) -> Self {
        self.regs[0] = raw as u16;
        self
    }

    /// Register writes, in order.
    pub fn writes(&self) -> Vec<(u8, u16)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Write(_, data) if data.len() == 3 => {
                    Some((data[0], u16::from_be_bytes([data[1], data[2]])))
                }
                _ => None,
            })
            .collect()
    }

    /// Config values written, in order.
    pub fn config_writes(&self) -> Vec<u16> {
        self.writes()
            .into_iter()
            .filter(|(reg, _)| *reg == 0x01)
            .map(|(_, value)| value)
            .collect()
    }

    /// Number of two byte reads taken while the pointer was at `reg`.
    pub fn reads_of(&self, reg: u8) -> usize {
        let mut pointer = 0;
        let mut count = 0;
        for op in &self.ops {
            match op {
                Op::Write(_, data) if !data.is_empty() => pointer = data[0],
                Op::Read(_, _) if pointer == reg => count += 1,
                _ => {}
            }
        }
        count
    }

    fn read_word(&mut self) -> u16 {
        let index = usize::from(self.pointer & 0b11);
        let mut value = self.regs[index];
        if index == 1 {
            if self.busy_reads > 0 {
                self.busy_reads = self.busy_reads.saturating_sub(1);
                value &= !0x8000;
            } else {
                value |= 0x8000;
            }
        }
        value
    }
}

impl ErrorType for RegisterFile {
    type Error = MockError;
}

impl I2c for RegisterFile {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockError);
        }

        for operation in operations {
            match operation {
                Operation::Write(data) => {
                    self.ops.push(Op::Write(address, data.to_vec()));
                    if let Some(&pointer) = data.first() {
                        self.pointer = pointer;
                    }
                    if let [reg, msb, lsb] = data[..] {
                        self.regs[usize::from(reg & 0b11)] = u16::from_be_bytes([msb, lsb]);
                    }
                }
                Operation::Read(buffer) => {
                    self.ops.push(Op::Read(address, buffer.len()));
                    let bytes = self.read_word().to_be_bytes();
                    for (dst, src) in buffer.iter_mut().zip(bytes) {
                        *dst = src;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Delay that only records what it was asked to wait.
#[derive(Debug, Default)]
pub struct Pauses {
    pub calls: usize,
    pub total_ns: u64,
}

impl DelayNs for Pauses {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}

use std::fmt;

/// A single 16-bit chip-8 instruction, as fetched from memory.
///
/// Fields are named after the usual nibble notation:
/// `F___` family, `_X__` register x, `__Y_` register y, `___N` 4-bit
/// immediate, `__KK` 8-bit immediate and `_NNN` 12-bit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction(u16);

#[inline(always)]
fn nibble_h(b: u8) -> u8 {
    (b >> 4) & 0xF
}

#[inline(always)]
fn nibble_l(b: u8) -> u8 {
    b & 0xF
}

impl Instruction {
    /// Combine two bytes (big-endian) into an instruction.
    pub fn from_bytes(a: u8, b: u8) -> Self {
        Instruction(((a as u16) << 8) | (b as u16))
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    /// Top nibble; selects the entry in the primary dispatch table.
    #[inline(always)]
    pub fn family(self) -> usize {
        nibble_h(self.hi()) as usize
    }

    #[inline(always)]
    pub fn x(self) -> usize {
        nibble_l(self.hi()) as usize
    }

    #[inline(always)]
    pub fn y(self) -> usize {
        nibble_h(self.kk()) as usize
    }

    #[inline(always)]
    pub fn n(self) -> u8 {
        nibble_l(self.kk())
    }

    #[inline(always)]
    pub fn kk(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline(always)]
    pub fn nnn(self) -> u16 {
        self.0 & 0xFFF
    }

    #[inline(always)]
    fn hi(self) -> u8 {
        (self.0 >> 8) as u8
    }
}

impl From<u16> for Instruction {
    fn from(raw: u16) -> Self {
        Instruction(raw)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

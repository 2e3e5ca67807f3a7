use crate::error::{Error, Result};

// memory size
pub const MEM_SIZE: usize = 4096;

// every address is truncated to this mask before use
const ADDR_MASK: u16 = (MEM_SIZE - 1) as u16;

// start of the font data
pub const FONT_START: u16 = 0x050;

// bytes per font glyph
pub const FONT_GLYPH_SIZE: u16 = 5;

// built-in font glyphs, digits 0 to F
pub const FONT_DATA: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

// start of the area for user programs
pub const ADDR_START: u16 = 0x200;

// rom size
pub const MAX_ROM_SIZE: usize = MEM_SIZE - ADDR_START as usize;

/// The 4K address space: font glyphs at `0x050`, program from `0x200`.
///
/// Addresses wider than 12 bits are truncated, so no access ever falls
/// outside the array.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEM_SIZE],
}

impl Memory {
    /// Zeroed memory with the font already in place.
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: [0u8; MEM_SIZE],
        };

        let start = FONT_START as usize;
        memory.bytes[start..start + FONT_DATA.len()].copy_from_slice(&FONT_DATA[..]);
        memory
    }

    /// Copy a program image to `0x200`, leaving everything else untouched.
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge(rom.len(), MAX_ROM_SIZE));
        }

        let start = ADDR_START as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    #[inline(always)]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[(addr & ADDR_MASK) as usize]
    }

    #[inline(always)]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[(addr & ADDR_MASK) as usize] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

use std::io::Read;

use log::{debug, trace, warn};

use crate::{
    dispatch,
    display::Framebuffer,
    error::Result,
    instruction::Instruction,
    keypad::Keypad,
    memory::{Memory, MAX_ROM_SIZE},
    registers::Registers,
    rng::{RandomSource, WyRandSource},
};

/// A chip-8 machine: registers, memory, framebuffer, keypad and the
/// random source used by `CXKK`.
///
/// The host drives it by calling [`Interpreter::step`] once per cycle,
/// updating the keypad before and reading the framebuffer and the sound
/// timer after, at whatever cadence it likes.
pub struct Interpreter {
    pub(crate) regs: Registers,
    pub(crate) memory: Memory,
    pub(crate) display: Framebuffer,
    pub(crate) keypad: Keypad,
    pub(crate) rng: Box<dyn RandomSource + Send>,
}

impl Interpreter {
    /// A fresh machine with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(Box::new(WyRandSource::new()))
    }

    /// A fresh machine whose random bytes are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Box::new(WyRandSource::with_seed(seed)))
    }

    pub fn with_rng(rng: Box<dyn RandomSource + Send>) -> Self {
        Interpreter {
            regs: Registers::new(),
            memory: Memory::new(),
            display: Framebuffer::new(),
            keypad: Keypad::new(),
            rng,
        }
    }

    /// Build a machine and load a chip-8 rom from any reader.
    pub fn load_rom<T>(rom: T) -> Result<Self>
    where
        T: Read,
    {
        // one extra byte is enough to tell an oversized rom apart
        let mut bytes = Vec::with_capacity(MAX_ROM_SIZE);
        rom.take(MAX_ROM_SIZE as u64 + 1).read_to_end(&mut bytes)?;

        let mut emu = Self::new();
        emu.load(&bytes)?;
        Ok(emu)
    }

    /// Copy a program image to `0x200`.
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        self.memory.load(rom)?;
        debug!("Loaded ROM [size: {}]", rom.len());
        Ok(())
    }

    /// Execute a single chip-8 CPU instruction, then tick both timers.
    ///
    /// On error the timers are left alone and PC stays past the failed
    /// instruction.
    pub fn step(&mut self) -> Result<()> {
        // read a command
        let pc = self.regs.PC;
        let a = self.memory.read(pc);
        let b = self.memory.read(pc.wrapping_add(1));
        self.regs.PC = pc.wrapping_add(2);

        let ins = Instruction::from_bytes(a, b);
        trace!("{:#05X}: {}", pc, ins);

        if let Err(err) = dispatch::execute(self, ins) {
            warn!("{}", err);
            return Err(err);
        }

        self.regs.tick_timers();
        Ok(())
    }

    pub fn set_key(&mut self, key: u8, state: bool) {
        self.keypad.set(key, state);
    }

    /// Replace the whole keypad state at once.
    pub fn set_keys(&mut self, keys: [bool; 16]) {
        self.keypad.set_all(keys);
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.display.pixel(x, y)
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.display
    }

    pub fn delay_timer(&self) -> u8 {
        self.regs.DT
    }

    pub fn sound_timer(&self) -> u8 {
        self.regs.ST
    }

    /// Whether a tone should be playing right now.
    pub fn sound_active(&self) -> bool {
        self.regs.ST > 0
    }

    pub fn pc(&self) -> u16 {
        self.regs.PC
    }

    pub fn index(&self) -> u16 {
        self.regs.I
    }

    pub fn sp(&self) -> usize {
        self.regs.SP
    }

    pub fn register(&self, r: usize) -> u8 {
        self.regs.V[r & 0xF]
    }

    pub fn memory(&self) -> &[u8] {
        self.memory.as_slice()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

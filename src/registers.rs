use crate::memory::ADDR_START;

// subroutine stack depth
pub const STACK_SIZE: usize = 16;

// flag register
pub const VF: usize = 0xF;

/// Everything the CPU keeps outside of memory: data registers, address
/// register, program counter, subroutine stack and the two timers.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    // data registers: V0 - VF
    pub V: [u8; 16],

    // address register
    pub I: u16,

    // program counter
    pub PC: u16,

    // subroutine stack and the number of frames in use
    pub stack: [u16; STACK_SIZE],
    pub SP: usize,

    // delay timer
    pub DT: u8,

    // sound timer
    pub ST: u8,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            V: [0u8; 16],
            I: 0,
            PC: ADDR_START,
            stack: [0u16; STACK_SIZE],
            SP: 0,
            DT: 0,
            ST: 0,
        }
    }

    /// Save `addr` on the stack. Returns `false` (and changes nothing)
    /// if all frames are already in use.
    pub fn push(&mut self, addr: u16) -> bool {
        if self.SP >= STACK_SIZE {
            return false;
        }
        self.stack[self.SP] = addr;
        self.SP += 1;
        true
    }

    /// Take the most recent address off the stack, if any.
    pub fn pop(&mut self) -> Option<u16> {
        if self.SP == 0 {
            return None;
        }
        self.SP -= 1;
        Some(self.stack[self.SP])
    }

    /// Move PC past the next instruction.
    #[inline(always)]
    pub fn skip(&mut self) {
        self.PC = self.PC.wrapping_add(2);
    }

    /// Decrease both timers by one, stopping at zero.
    pub fn tick_timers(&mut self) {
        self.DT = self.DT.saturating_sub(1);
        self.ST = self.ST.saturating_sub(1);
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

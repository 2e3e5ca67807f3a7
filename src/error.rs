use thiserror::Error;

use crate::instruction::Instruction;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ROM is too large: {0} bytes (maximum is {1} bytes)")]
    RomTooLarge(usize, usize),

    #[error("Invalid instruction at address {address:#05X}: {instruction}")]
    InvalidOpcode {
        instruction: Instruction,
        address: u16,
    },

    #[error("Stack overflow on call at address {address:#05X}")]
    StackOverflow { address: u16 },

    #[error("Stack underflow on return at address {address:#05X}")]
    StackUnderflow { address: u16 },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

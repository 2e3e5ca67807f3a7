//! A chip-8 interpreter core.
//!
//! [`Interpreter`] owns the whole machine and is driven one cycle at a
//! time through [`Interpreter::step`]. Presentation, input polling and
//! timing are left to the host.

mod dispatch;
pub mod display;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod keypad;
pub mod memory;
mod ops;
pub mod registers;
pub mod rng;

pub use display::{Framebuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use interpreter::Interpreter;
pub use memory::MAX_ROM_SIZE;
pub use rng::{FixedSequence, RandomSource, WyRandSource};

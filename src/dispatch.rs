//! Two-level opcode table.
//!
//! The primary table is indexed by the top nibble. Four of its entries
//! are families that look the instruction up again in a secondary table:
//! `0`, `8` and `E` by the low nibble, `F` by the whole low byte (so that
//! `F_15`, `F_55` and `F_65` end up in different slots).

use crate::{
    error::{Error, Result},
    instruction::Instruction,
    interpreter::Interpreter,
    ops,
};

pub type Handler = fn(&mut Interpreter, Instruction) -> Result<()>;

const PRIMARY: [Handler; 16] = [
    family_0,      // 0___
    ops::jp,       // 1NNN
    ops::call,     // 2NNN
    ops::se_byte,  // 3XKK
    ops::sne_byte, // 4XKK
    ops::se_reg,   // 5XY0
    ops::ld_byte,  // 6XKK
    ops::add_byte, // 7XKK
    family_8,      // 8XY_
    ops::sne_reg,  // 9XY0
    ops::ld_i,     // ANNN
    ops::jp_v0,    // BNNN
    ops::rnd,      // CXKK
    ops::drw,      // DXYN
    family_e,      // EX__
    family_f,      // FX__
];

const TABLE_0: [Option<Handler>; 16] = {
    let mut t: [Option<Handler>; 16] = [None; 16];
    t[0x0] = Some(ops::cls as Handler);
    t[0xE] = Some(ops::ret as Handler);
    t
};

const TABLE_8: [Option<Handler>; 16] = {
    let mut t: [Option<Handler>; 16] = [None; 16];
    t[0x0] = Some(ops::ld_reg as Handler);
    t[0x1] = Some(ops::or as Handler);
    t[0x2] = Some(ops::and as Handler);
    t[0x3] = Some(ops::xor as Handler);
    t[0x4] = Some(ops::add_reg as Handler);
    t[0x5] = Some(ops::sub as Handler);
    t[0x6] = Some(ops::shr as Handler);
    t[0x7] = Some(ops::subn as Handler);
    t[0xE] = Some(ops::shl as Handler);
    t
};

const TABLE_E: [Option<Handler>; 16] = {
    let mut t: [Option<Handler>; 16] = [None; 16];
    t[0xE] = Some(ops::skp as Handler);
    t[0x1] = Some(ops::sknp as Handler);
    t
};

const TABLE_F: [Option<Handler>; 256] = {
    let mut t: [Option<Handler>; 256] = [None; 256];
    t[0x07] = Some(ops::ld_vx_dt as Handler);
    t[0x0A] = Some(ops::ld_vx_key as Handler);
    t[0x15] = Some(ops::ld_dt_vx as Handler);
    t[0x18] = Some(ops::ld_st_vx as Handler);
    t[0x1E] = Some(ops::add_i as Handler);
    t[0x29] = Some(ops::ld_font as Handler);
    t[0x33] = Some(ops::ld_bcd as Handler);
    t[0x55] = Some(ops::store_regs as Handler);
    t[0x65] = Some(ops::load_regs as Handler);
    t
};

/// Run one instruction through the tables.
pub fn execute(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    PRIMARY[ins.family()](cpu, ins)
}

fn family_0(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    lookup(&TABLE_0, ins.n() as usize, cpu, ins)
}

fn family_8(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    lookup(&TABLE_8, ins.n() as usize, cpu, ins)
}

fn family_e(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    lookup(&TABLE_E, ins.n() as usize, cpu, ins)
}

fn family_f(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    lookup(&TABLE_F, ins.kk() as usize, cpu, ins)
}

fn lookup(
    table: &[Option<Handler>],
    key: usize,
    cpu: &mut Interpreter,
    ins: Instruction,
) -> Result<()> {
    match table[key] {
        Some(handler) => handler(cpu, ins),
        None => Err(Error::InvalidOpcode {
            instruction: ins,
            address: cpu.regs.PC.wrapping_sub(2),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(table: &[Option<Handler>]) -> usize {
        table.iter().filter(|h| h.is_some()).count()
    }

    #[test]
    fn test_table_sizes() {
        // 12 direct entries + 2 + 9 + 2 + 9 = 34 handlers (0NNN is not one)
        assert_eq!(populated(&TABLE_0), 2);
        assert_eq!(populated(&TABLE_8), 9);
        assert_eq!(populated(&TABLE_E), 2);
        assert_eq!(populated(&TABLE_F), 9);
    }

    #[test]
    fn test_unpopulated_slots() {
        for raw in [0x0123u16, 0x8008, 0x800F, 0xE0A2, 0xF000, 0xF016, 0xFF56] {
            let mut cpu = Interpreter::with_seed(0);
            let result = execute(&mut cpu, Instruction::from(raw));
            assert!(
                matches!(result, Err(Error::InvalidOpcode { instruction, .. }) if instruction.raw() == raw),
                "{:04X} should be invalid",
                raw
            );
        }
    }

    #[test]
    fn test_f_family_keyed_by_byte() {
        let mut cpu = Interpreter::with_seed(0);
        cpu.regs.V[0x3] = 0x42;

        // F315 and F355 differ only in the high nibble of the low byte
        execute(&mut cpu, Instruction::from(0xF315)).unwrap();
        assert_eq!(cpu.regs.DT, 0x42);

        cpu.regs.I = 0x300;
        execute(&mut cpu, Instruction::from(0xF355)).unwrap();
        assert_eq!(cpu.memory.read(0x303), 0x42);
    }
}

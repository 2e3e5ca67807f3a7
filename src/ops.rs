//! Instruction handlers. Each one receives the machine and the already
//! fetched instruction; PC points to the next instruction on entry.

use crate::{
    error::{Error, Result},
    instruction::Instruction,
    interpreter::Interpreter,
    memory::{FONT_GLYPH_SIZE, FONT_START},
    registers::VF,
};

// address the running instruction was fetched from
#[inline(always)]
fn fetched_at(cpu: &Interpreter) -> u16 {
    cpu.regs.PC.wrapping_sub(2)
}

// 00E0 - Clear the screen
pub fn cls(cpu: &mut Interpreter, _ins: Instruction) -> Result<()> {
    cpu.display.clear();
    Ok(())
}

// 00EE - Return from subroutine
pub fn ret(cpu: &mut Interpreter, _ins: Instruction) -> Result<()> {
    match cpu.regs.pop() {
        Some(addr) => {
            cpu.regs.PC = addr;
            Ok(())
        }
        None => Err(Error::StackUnderflow {
            address: fetched_at(cpu),
        }),
    }
}

// 1NNN - Jump to address NNN
pub fn jp(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.PC = ins.nnn();
    Ok(())
}

// 2NNN - Call subroutine at NNN
pub fn call(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    if !cpu.regs.push(cpu.regs.PC) {
        return Err(Error::StackOverflow {
            address: fetched_at(cpu),
        });
    }
    cpu.regs.PC = ins.nnn();
    Ok(())
}

// 3XKK - Skip next if VX == KK
pub fn se_byte(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    if cpu.regs.V[ins.x()] == ins.kk() {
        cpu.regs.skip();
    }
    Ok(())
}

// 4XKK - Skip next if VX != KK
pub fn sne_byte(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    if cpu.regs.V[ins.x()] != ins.kk() {
        cpu.regs.skip();
    }
    Ok(())
}

// 5XY0 - Skip next if VX == VY
pub fn se_reg(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    if cpu.regs.V[ins.x()] == cpu.regs.V[ins.y()] {
        cpu.regs.skip();
    }
    Ok(())
}

// 6XKK - Set VX = KK
pub fn ld_byte(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.V[ins.x()] = ins.kk();
    Ok(())
}

// 7XKK - Set VX = VX + KK (VF untouched)
pub fn add_byte(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let x = ins.x();
    cpu.regs.V[x] = cpu.regs.V[x].wrapping_add(ins.kk());
    Ok(())
}

// 8XY0 - Set VX = VY
pub fn ld_reg(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.V[ins.x()] = cpu.regs.V[ins.y()];
    Ok(())
}

// 8XY1 - Set VX = VX | VY
pub fn or(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.V[ins.x()] |= cpu.regs.V[ins.y()];
    Ok(())
}

// 8XY2 - Set VX = VX & VY
pub fn and(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.V[ins.x()] &= cpu.regs.V[ins.y()];
    Ok(())
}

// 8XY3 - Set VX = VX ^ VY
pub fn xor(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.V[ins.x()] ^= cpu.regs.V[ins.y()];
    Ok(())
}

// The flag-setting ALU ops below write VF before the result, so with
// X == F the result is what stays in VF.

// 8XY4 - Set VX = VX + VY, set VF to 1 if carry
pub fn add_reg(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let (x, y) = (ins.x(), ins.y());
    let v = &mut cpu.regs.V;
    let sum = v[x] as u16 + v[y] as u16;
    v[VF] = (sum > 0xFF) as u8;
    v[x] = sum as u8;
    Ok(())
}

// 8XY5 - Set VX = VX - VY, set VF to 1 if VX > VY
pub fn sub(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let (x, y) = (ins.x(), ins.y());
    let v = &mut cpu.regs.V;
    v[VF] = (v[x] > v[y]) as u8;
    v[x] = v[x].wrapping_sub(v[y]);
    Ok(())
}

// 8XY6 - Set VX = VX >> 1; set VF to shifted bit
pub fn shr(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let x = ins.x();
    let v = &mut cpu.regs.V;
    v[VF] = v[x] & 1;
    v[x] >>= 1;
    Ok(())
}

// 8XY7 - Set VX = VY - VX, set VF to 1 if VY > VX
pub fn subn(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let (x, y) = (ins.x(), ins.y());
    let v = &mut cpu.regs.V;
    v[VF] = (v[y] > v[x]) as u8;
    v[x] = v[y].wrapping_sub(v[x]);
    Ok(())
}

// 8XYE - Set VX = VX << 1; set VF to shifted bit
pub fn shl(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let x = ins.x();
    let v = &mut cpu.regs.V;
    v[VF] = (v[x] >> 7) & 1;
    v[x] <<= 1;
    Ok(())
}

// 9XY0 - Skip next if VX != VY
pub fn sne_reg(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    if cpu.regs.V[ins.x()] != cpu.regs.V[ins.y()] {
        cpu.regs.skip();
    }
    Ok(())
}

// ANNN - Set I = NNN
pub fn ld_i(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.I = ins.nnn();
    Ok(())
}

// BNNN - Jump to address NNN + V0
pub fn jp_v0(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.PC = cpu.regs.V[0x0] as u16 + ins.nnn();
    Ok(())
}

// CXKK - Set VX to a random number with mask KK
pub fn rnd(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.V[ins.x()] = cpu.rng.next_byte() & ins.kk();
    Ok(())
}

// DXYN - Draw N rows of the sprite at I on (VX, VY); VF = 1 on collision
pub fn drw(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let x = cpu.regs.V[ins.x()];
    let y = cpu.regs.V[ins.y()];
    let height = ins.n() as usize;

    let mut sprite = [0u8; 15];
    for (row, byte) in sprite.iter_mut().take(height).enumerate() {
        *byte = cpu.memory.read(cpu.regs.I.wrapping_add(row as u16));
    }

    cpu.regs.V[VF] = 0;
    if cpu.display.draw_sprite(x, y, &sprite[..height]) {
        cpu.regs.V[VF] = 1;
    }
    Ok(())
}

// EX9E - Skip next if the key on VX value is pressed
pub fn skp(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    if cpu.keypad.is_pressed(cpu.regs.V[ins.x()]) {
        cpu.regs.skip();
    }
    Ok(())
}

// EXA1 - Skip next if the key on VX value is NOT pressed
pub fn sknp(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    if !cpu.keypad.is_pressed(cpu.regs.V[ins.x()]) {
        cpu.regs.skip();
    }
    Ok(())
}

// FX07 - Store the DT value into VX
pub fn ld_vx_dt(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.V[ins.x()] = cpu.regs.DT;
    Ok(())
}

// FX0A - Wait for a key press and store the digit on VX
// (re-runs itself until a key is down; timers keep ticking)
pub fn ld_vx_key(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    match cpu.keypad.first_pressed() {
        Some(key) => cpu.regs.V[ins.x()] = key,
        None => cpu.regs.PC = cpu.regs.PC.wrapping_sub(2),
    }
    Ok(())
}

// FX15 - Store the VX value into DT
pub fn ld_dt_vx(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.DT = cpu.regs.V[ins.x()];
    Ok(())
}

// FX18 - Store the VX value into ST
pub fn ld_st_vx(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.ST = cpu.regs.V[ins.x()];
    Ok(())
}

// FX1E - Set I = I + VX
pub fn add_i(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    cpu.regs.I = cpu.regs.I.wrapping_add(cpu.regs.V[ins.x()] as u16);
    Ok(())
}

// FX29 - Set I to the address of the font glyph for the digit in VX
pub fn ld_font(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let digit = cpu.regs.V[ins.x()] as u16;
    cpu.regs.I = FONT_START + FONT_GLYPH_SIZE * digit;
    Ok(())
}

// FX33 - Store BCD of VX into I, I+1 and I+2
pub fn ld_bcd(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    let value = cpu.regs.V[ins.x()];
    let i = cpu.regs.I;
    cpu.memory.write(i, value / 100);
    cpu.memory.write(i.wrapping_add(1), value / 10 % 10);
    cpu.memory.write(i.wrapping_add(2), value % 10);
    Ok(())
}

// FX55 - Store from V0 to VX, starting on I (I unchanged)
pub fn store_regs(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    for r in 0..=ins.x() {
        let addr = cpu.regs.I.wrapping_add(r as u16);
        cpu.memory.write(addr, cpu.regs.V[r]);
    }
    Ok(())
}

// FX65 - Load from I into V0 -> VX (I unchanged)
pub fn load_regs(cpu: &mut Interpreter, ins: Instruction) -> Result<()> {
    for r in 0..=ins.x() {
        let addr = cpu.regs.I.wrapping_add(r as u16);
        cpu.regs.V[r] = cpu.memory.read(addr);
    }
    Ok(())
}

//! LS-8 Instruction Decoder.
//!
//! Turns the bytes at a memory address into a typed [`Instruction`]. The opcode
//! byte is matched against the fixed instruction set; operand bytes are then
//! fetched from the addresses that follow it.

use crate::common::{Ls8Error, Result};
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes;
use crate::soc::Memory;

/// Decodes the instruction starting at `pc`.
///
/// # Errors
///
/// * [`Ls8Error::UnknownOpcode`] if the byte at `pc` is not part of the instruction set.
/// * [`Ls8Error::AddressOutOfRange`] if the opcode or an operand lies past the end of memory.
pub fn decode(mem: &Memory, pc: usize) -> Result<Instruction> {
    let opcode = mem.read(pc)?;
    if !is_known(opcode) {
        return Err(Ls8Error::UnknownOpcode { opcode, pc });
    }

    let mut operands = [0u8; 2];
    for (i, slot) in operands.iter_mut().take(opcode.operand_count()).enumerate() {
        *slot = mem.read(pc + 1 + i)?;
    }
    let [a, b] = operands;

    let inst = match opcode {
        opcodes::HLT => Instruction::Halt,
        opcodes::LDI => Instruction::LoadImmediate { reg: a, value: b },
        opcodes::PRN => Instruction::Print { reg: a },
        opcodes::MUL => Instruction::Multiply { reg_a: a, reg_b: b },
        opcodes::PUSH => Instruction::Push { reg: a },
        opcodes::POP => Instruction::Pop { reg: a },
        _ => return Err(Ls8Error::UnknownOpcode { opcode, pc }),
    };
    Ok(inst)
}

/// Whether `opcode` belongs to the instruction set.
pub const fn is_known(opcode: u8) -> bool {
    matches!(
        opcode,
        opcodes::HLT | opcodes::LDI | opcodes::PRN | opcodes::MUL | opcodes::PUSH | opcodes::POP
    )
}

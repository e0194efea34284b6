//! LS-8 Opcodes.
//!
//! Opcode bytes use the layout `AABCDDDD`: `AA` is the operand count, `B` marks
//! ALU operations, `C` marks instructions that set the PC, and `DDDD` is the
//! instruction identifier.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate value into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print the decimal value of a register.
pub const PRN: u8 = 0b0100_0111;

/// Multiply two registers, storing the result in the first.
pub const MUL: u8 = 0b1010_0010;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

//! Instruction encoding and decoded representation.
//!
//! Provides bit extraction for LS-8 opcode bytes and the [`Instruction`] enum the
//! decoder produces.

/// Bit shift for the operand count field (bits 6-7).
pub const OPERAND_COUNT_SHIFT: u8 = 6;
/// Bit mask for the ALU flag (bit 5).
pub const ALU_FLAG_MASK: u8 = 0b0010_0000;
/// Bit mask for the sets-PC flag (bit 4).
pub const SETS_PC_MASK: u8 = 0b0001_0000;
/// Bit mask for the instruction identifier (bits 0-3).
pub const IDENTIFIER_MASK: u8 = 0b0000_1111;

/// Trait for extracting fields from an LS-8 opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (0-2).
    fn operand_count(&self) -> usize;

    /// Total encoded width in bytes, opcode included.
    fn width(&self) -> usize {
        1 + self.operand_count()
    }

    /// Whether the instruction is executed by the ALU.
    fn is_alu(&self) -> bool;

    /// Whether the instruction sets the PC itself.
    fn sets_pc(&self) -> bool;

    /// The low-nibble instruction identifier.
    fn identifier(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_FLAG_MASK != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_MASK != 0
    }

    #[inline(always)]
    fn identifier(&self) -> u8 {
        self & IDENTIFIER_MASK
    }
}

/// A fully decoded LS-8 instruction with its operands.
///
/// Register operands are kept as the raw operand byte; they are validated when
/// the register file is accessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `HLT`: stop execution.
    Halt,
    /// `LDI reg, value`: load an immediate.
    LoadImmediate {
        /// Destination register.
        reg: u8,
        /// Immediate value.
        value: u8,
    },
    /// `PRN reg`: print a register in decimal.
    Print {
        /// Register to print.
        reg: u8,
    },
    /// `MUL reg_a, reg_b`: `reg_a = reg_a * reg_b`.
    Multiply {
        /// Destination and first source register.
        reg_a: u8,
        /// Second source register.
        reg_b: u8,
    },
    /// `PUSH reg`: push a register onto the stack.
    Push {
        /// Source register.
        reg: u8,
    },
    /// `POP reg`: pop the stack into a register.
    Pop {
        /// Destination register.
        reg: u8,
    },
}

impl Instruction {
    /// Opcode byte that encodes this instruction.
    pub const fn opcode(&self) -> u8 {
        use crate::isa::opcodes;
        match self {
            Self::Halt => opcodes::HLT,
            Self::LoadImmediate { .. } => opcodes::LDI,
            Self::Print { .. } => opcodes::PRN,
            Self::Multiply { .. } => opcodes::MUL,
            Self::Push { .. } => opcodes::PUSH,
            Self::Pop { .. } => opcodes::POP,
        }
    }

    /// Upper-case mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Halt => "HLT",
            Self::LoadImmediate { .. } => "LDI",
            Self::Print { .. } => "PRN",
            Self::Multiply { .. } => "MUL",
            Self::Push { .. } => "PUSH",
            Self::Pop { .. } => "POP",
        }
    }

    /// Encoded width in bytes; the amount the PC advances after execution.
    pub fn width(&self) -> usize {
        self.opcode().width()
    }

    /// Encodes the instruction back into its byte form.
    pub fn encode(&self) -> Vec<u8> {
        let op = self.opcode();
        match *self {
            Self::Halt => vec![op],
            Self::LoadImmediate { reg, value } => vec![op, reg, value],
            Self::Multiply { reg_a, reg_b } => vec![op, reg_a, reg_b],
            Self::Print { reg } | Self::Push { reg } | Self::Pop { reg } => vec![op, reg],
        }
    }
}

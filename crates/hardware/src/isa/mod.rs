//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, the decoded instruction type, the decoder
//! and the disassembler.

/// Instruction decoding from memory.
pub mod decode;

/// Instruction disassembler for debug tracing and program listings.
pub mod disasm;

/// Decoded instruction type and opcode bit extraction.
pub mod instruction;

/// Opcode byte values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::Instruction;

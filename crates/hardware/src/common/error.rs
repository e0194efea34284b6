//! Error definitions.
//!
//! Every fallible operation in the crate returns [`Ls8Error`]. The variants fall into
//! two groups:
//! 1. **Machine faults:** Out-of-range addresses, bad register operands, unknown opcodes.
//! 2. **Boundary failures:** Program files that cannot be read, oversized images,
//!    output stream failures, and malformed configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Ls8Error>;

/// Errors raised by the LS-8 emulator.
#[derive(Debug, Error)]
pub enum Ls8Error {
    /// A memory access fell outside `0x00..=0xFF`.
    ///
    /// This indicates a miscomputed address (for example, an operand fetch past
    /// the end of memory) and is never wrapped silently.
    #[error("memory address {addr:#06x} is out of range")]
    AddressOutOfRange {
        /// The offending address.
        addr: usize,
    },

    /// The program image does not fit in memory.
    #[error("program of {len} bytes does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        /// Length of the rejected image.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// An operand named a register outside `R0`-`R7`.
    #[error("register index {0} is out of range")]
    InvalidRegister(u8),

    /// The byte at `pc` is not a known opcode.
    ///
    /// The program counter has lost synchronisation with instruction
    /// boundaries; execution cannot continue.
    #[error("unknown instruction {opcode:#010b} at address {pc:#04x}")]
    UnknownOpcode {
        /// The undecodable byte.
        opcode: u8,
        /// Address it was fetched from.
        pc: usize,
    },

    /// An ALU operation name outside ADD, SUB and MUL.
    #[error("unsupported ALU operation `{0}`")]
    UnsupportedAluOp(String),

    /// A program or configuration file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// File that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing PRN output failed.
    #[error("failed to write program output: {0}")]
    Output(#[from] io::Error),

    /// The configuration document was malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

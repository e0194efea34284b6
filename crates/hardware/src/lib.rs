//! LS-8 emulator library.
//!
//! This crate implements an interpreter for the LS-8, an 8-bit CPU with 256 bytes
//! of memory and eight general-purpose registers:
//! 1. **Core:** Register file, ALU, and the fetch-decode-execute loop.
//! 2. **Memory:** Bounds-checked flat RAM.
//! 3. **ISA:** Opcodes, decoding into a typed instruction, and disassembly.
//! 4. **Simulation:** Program text loader, configuration, and execution statistics.
//!
//! ```
//! use ls8_core::Cpu;
//!
//! let mut cpu = Cpu::default();
//! cpu.load(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap();
//! let mut out = Vec::new();
//! cpu.run(&mut out).unwrap();
//! assert_eq!(out, b"8\n");
//! ```

/// Common types and constants (errors, machine sizes).
pub mod common;
/// Emulator configuration.
pub mod config;
/// CPU core (registers, ALU, execution).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader.
pub mod sim;
/// System-on-chip (memory).
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; owns registers, memory and statistics.
pub use crate::core::Cpu;
/// Crate-wide error and result types.
pub use crate::common::{Ls8Error, Result};

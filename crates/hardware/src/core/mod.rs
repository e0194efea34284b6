//! CPU Core Implementation.
//!
//! 1. **Architecture:** The register file.
//! 2. **Units:** The ALU.
//! 3. **CPU:** State, the execution loop, and tracing.

/// Architectural state (general-purpose registers).
pub mod arch;

/// CPU definition and execution.
pub mod cpu;

/// Functional units.
pub mod units;

pub use self::cpu::{Cpu, RunState};

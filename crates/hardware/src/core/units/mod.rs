//! Execution units.

/// Integer ALU.
pub mod alu;

//! Architectural state.

/// General-purpose register file.
pub mod gpr;

//! Common types and constants shared across the emulator.
//!
//! 1. **Constants:** Memory size, register count, stack layout.
//! 2. **Error Handling:** The crate-wide error enum and `Result` alias.

/// Machine-wide constants.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP, STACK_TOP};
pub use error::{Ls8Error, Result};

//! Machine-wide constants for the LS-8.
//!
//! Sizes of the architectural state and the conventional stack layout.

/// Number of addressable bytes of memory (addresses `0x00`-`0xFF`).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer.
pub const SP: u8 = 7;

/// Address the stack pointer points at on an empty stack.
///
/// The stack grows downward from here; `0xF5`-`0xFF` stay free for
/// memory-mapped use and are never touched by PUSH on a fresh CPU.
pub const STACK_TOP: u8 = 0xF4;

/// Number of memory bytes shown after the PC in a trace line.
pub const TRACE_WINDOW: usize = 3;

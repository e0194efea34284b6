//! System-on-Chip components.
//!
//! The LS-8 has a single device on its bus: 256 bytes of RAM.

/// Main memory.
pub mod memory;

pub use memory::Memory;

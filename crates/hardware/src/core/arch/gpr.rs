//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight 8-bit registers of the LS-8. It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R7`.
//! 2. **Index Checking:** Rejects operand bytes that do not name a register.
//! 3. **Debugging:** Renders the complete register state for dumps.

use std::fmt;

use crate::common::{Ls8Error, NUM_REGISTERS, Result, SP};

/// General-Purpose Register file.
///
/// `R7` doubles as the stack pointer by convention and has dedicated accessors;
/// otherwise every register behaves the same.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7), usually an operand byte.
    ///
    /// # Errors
    ///
    /// [`Ls8Error::InvalidRegister`] if `idx` is 8 or more.
    #[inline]
    pub fn read(&self, idx: u8) -> Result<u8> {
        self.regs
            .get(idx as usize)
            .copied()
            .ok_or(Ls8Error::InvalidRegister(idx))
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 8-bit value to store.
    ///
    /// # Errors
    ///
    /// [`Ls8Error::InvalidRegister`] if `idx` is 8 or more.
    #[inline]
    pub fn write(&mut self, idx: u8, val: u8) -> Result<()> {
        let reg = self
            .regs
            .get_mut(idx as usize)
            .ok_or(Ls8Error::InvalidRegister(idx))?;
        *reg = val;
        Ok(())
    }

    /// Reads the stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    /// Writes the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP as usize] = val;
    }

    /// Returns a copy of all eight registers.
    pub const fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }
}

impl fmt::Display for Gpr {
    /// Formats registers in pairs, `R0=0x00 R1=0x00` per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "R{}={:#04x} R{}={:#04x}",
                i * 2,
                pair[0],
                i * 2 + 1,
                pair[1]
            )?;
        }
        Ok(())
    }
}

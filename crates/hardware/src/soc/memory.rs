//! System Memory.
//!
//! A flat, byte-addressable RAM of [`MEMORY_SIZE`] cells. It provides:
//! 1. **Checked access:** Every read and write is range checked; nothing wraps.
//! 2. **Image loading:** Programs are copied in from address `0x00`.

use crate::common::{Ls8Error, MEMORY_SIZE, Result};

/// LS-8 main memory.
///
/// Zero-initialised at construction and owned exclusively by the CPU.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Number of addressable bytes.
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Memory always has capacity; provided for API symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`Ls8Error::AddressOutOfRange`] if `addr` is not below [`MEMORY_SIZE`].
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(Ls8Error::AddressOutOfRange { addr })
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// [`Ls8Error::AddressOutOfRange`] if `addr` is not below [`MEMORY_SIZE`].
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<()> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(Ls8Error::AddressOutOfRange { addr })?;
        *cell = val;
        Ok(())
    }

    /// Copies `image` into memory starting at address `0x00`.
    ///
    /// Memory is not cleared first: bytes past the end of `image` keep whatever
    /// an earlier load or write left there.
    ///
    /// # Errors
    ///
    /// [`Ls8Error::ProgramTooLarge`] if `image` is longer than memory. Memory is
    /// left untouched in that case.
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        if image.len() > MEMORY_SIZE {
            return Err(Ls8Error::ProgramTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns the whole memory image.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

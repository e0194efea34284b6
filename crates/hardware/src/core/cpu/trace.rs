//! Trace line rendering.
//!
//! A trace line shows the PC, the next [`TRACE_WINDOW`] bytes of memory, and
//! every register, all as two-digit hex:
//!
//! ```text
//! TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
//! ```
//!
//! Bytes past the end of memory are shown as `--`.

use std::fmt::Write as _;

use super::Cpu;
use crate::common::constants::TRACE_WINDOW;

impl Cpu {
    /// Renders the current state as a single trace line.
    pub fn trace_line(&self) -> String {
        let mut line = format!("TRACE: {:02X} |", self.pc);
        for offset in 0..TRACE_WINDOW {
            match self.ram.read(self.pc + offset) {
                Ok(byte) => {
                    let _ = write!(line, " {byte:02X}");
                }
                Err(_) => line.push_str(" --"),
            }
        }
        line.push_str(" |");
        for reg in self.regs.snapshot() {
            let _ = write!(line, " {reg:02X}");
        }
        line
    }
}

//! Instruction Disassembler for the LS-8.
//!
//! Converts decoded instructions into assembler text for trace logging and the
//! CLI program listing.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! use ls8_core::isa::instruction::Instruction;
//!
//! let text = disassemble(&Instruction::LoadImmediate { reg: 0, value: 8 });
//! assert_eq!(text, "LDI R0,0x08");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::soc::Memory;

/// Returns the assembler text for `inst`.
pub fn disassemble(inst: &Instruction) -> String {
    inst.to_string()
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic();
        match *self {
            Self::Halt => f.write_str(m),
            Self::LoadImmediate { reg, value } => write!(f, "{m} R{reg},{value:#04x}"),
            Self::Multiply { reg_a, reg_b } => write!(f, "{m} R{reg_a},R{reg_b}"),
            Self::Print { reg } | Self::Push { reg } | Self::Pop { reg } => {
                write!(f, "{m} R{reg}")
            }
        }
    }
}

/// Produces a linear listing of the first `len` bytes of memory.
///
/// Decoding starts at address 0 and follows instruction widths. It stops after
/// `HLT`, at the first byte that does not decode (shown as a `.byte` line), or
/// once `len` bytes are covered.
///
/// Each line reads `ADDR: BYTES  TEXT`, e.g. `00: 82 00 08  LDI R0,0x08`.
pub fn listing(mem: &Memory, len: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pc = 0;
    while pc < len {
        let Ok(inst) = decode(mem, pc) else {
            let byte = mem.read(pc).unwrap_or_default();
            lines.push(format!("{pc:02X}: {byte:02X}        .byte {byte:#010b}"));
            break;
        };
        let bytes = inst
            .encode()
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("{pc:02X}: {bytes:<8}  {inst}"));
        if inst == Instruction::Halt {
            break;
        }
        pc += inst.width();
    }
    lines
}

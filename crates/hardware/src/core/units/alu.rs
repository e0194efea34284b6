//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit integer ALU. Results wrap modulo 256,
//! matching the width of the register file.

use std::fmt;
use std::str::FromStr;

use crate::common::Ls8Error;

/// Operations the ALU can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
}

impl AluOp {
    /// Upper-case mnemonic for this operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AluOp {
    type Err = Ls8Error;

    /// Parses an operation name, ignoring ASCII case.
    ///
    /// Anything other than `ADD`, `SUB` or `MUL` yields
    /// [`Ls8Error::UnsupportedAluOp`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Self::Add),
            "SUB" => Ok(Self::Sub),
            "MUL" => Ok(Self::Mul),
            _ => Err(Ls8Error::UnsupportedAluOp(s.to_owned())),
        }
    }
}

/// Arithmetic Logic Unit for 8-bit register operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand (destination register value).
    /// * `b`  - Second operand.
    ///
    /// # Returns
    ///
    /// The result truncated to 8 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 250, 10), 4);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, 1), 255);
    /// assert_eq!(Alu::execute(AluOp::Mul, 16, 17), 16);
    /// ```
    #[inline]
    pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Mul => a.wrapping_mul(b),
        }
    }
}

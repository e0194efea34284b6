//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch/Decode:** Reads the opcode and operands at the PC into an [`Instruction`].
//! 2. **Execute:** Applies the instruction to registers, memory and the output stream.
//! 3. **PC Advance:** Moves the PC past the instruction by its encoded width.
//! 4. **Observability:** Emits trace lines and records statistics.

use std::io::Write;

use tracing::{info, trace};

use super::{Cpu, RunState};
use crate::common::Result;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::{Instruction, decode};

impl Cpu {
    /// Runs until `HLT`.
    ///
    /// `PRN` output is written to `out`, one decimal value per line.
    ///
    /// # Errors
    ///
    /// Stops at the first fault. An unknown opcode yields
    /// [`crate::common::Ls8Error::UnknownOpcode`]; output written before the
    /// fault stays written.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        self.state = RunState::Running;
        while self.step(out)? == RunState::Running {}
        info!(instructions = self.stats.instructions_retired, "halted");
        Ok(())
    }

    /// Fetches, decodes and executes exactly one instruction.
    ///
    /// # Returns
    ///
    /// The run state after the instruction: [`RunState::Halted`] once `HLT` executes.
    ///
    /// # Errors
    ///
    /// Decode faults and out-of-range accesses; the CPU state is unchanged in that case.
    pub fn step<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<RunState> {
        if self.trace {
            eprintln!("{}", self.trace_line());
        }

        let inst = decode(&self.ram, self.pc)?;
        trace!(pc = self.pc, "{inst}");
        self.execute(inst, out)?;
        self.stats.record(&inst);
        Ok(self.state)
    }

    /// Applies a decoded instruction and advances the PC.
    ///
    /// # Errors
    ///
    /// Invalid register operands and output failures.
    pub fn execute<W: Write + ?Sized>(&mut self, inst: Instruction, out: &mut W) -> Result<()> {
        match inst {
            Instruction::Halt => {
                self.state = RunState::Halted;
                if self.halt_resets_pc {
                    self.pc = 0;
                }
                return Ok(());
            }
            Instruction::LoadImmediate { reg, value } => self.regs.write(reg, value)?,
            Instruction::Print { reg } => writeln!(out, "{}", self.regs.read(reg)?)?,
            Instruction::Multiply { reg_a, reg_b } => self.alu(AluOp::Mul, reg_a, reg_b)?,
            Instruction::Push { reg } => {
                let val = self.regs.read(reg)?;
                self.push(val)?;
            }
            Instruction::Pop { reg } => {
                let val = self.ram.read(self.sp() as usize)?;
                self.regs.write(reg, val)?;
                self.regs.set_sp(self.sp().wrapping_add(1));
            }
        }
        self.pc += inst.width();
        Ok(())
    }

    /// Performs `op` in place: `reg_a = reg_a op reg_b`, wrapping at 8 bits.
    ///
    /// # Errors
    ///
    /// [`crate::common::Ls8Error::InvalidRegister`] if either operand is not a register.
    pub fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<()> {
        let a = self.regs.read(reg_a)?;
        let b = self.regs.read(reg_b)?;
        self.regs.write(reg_a, Alu::execute(op, a, b))
    }

    /// Decrements SP and stores `val` at the new top of stack.
    fn push(&mut self, val: u8) -> Result<()> {
        let sp = self.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram.write(sp as usize, val)
    }
}

//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Totals:** Retired instructions and values printed.
//! 2. **Instruction mix:** Counts per instruction kind.
//! 3. **Stack traffic:** Deepest stack excursion observed.

use std::fmt;

use crate::isa::Instruction;

/// Execution statistics for one CPU.
///
/// Counters accumulate across `run` calls until [`ExecStats::reset`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecStats {
    /// Number of instructions executed to completion (HLT included).
    pub instructions_retired: u64,
    /// Number of values written by `PRN`.
    pub values_printed: u64,

    /// Count of `HLT` instructions retired.
    pub inst_halt: u64,
    /// Count of `LDI` instructions retired.
    pub inst_load_immediate: u64,
    /// Count of `PRN` instructions retired.
    pub inst_print: u64,
    /// Count of ALU (`MUL`) instructions retired.
    pub inst_alu: u64,
    /// Count of `PUSH` instructions retired.
    pub inst_push: u64,
    /// Count of `POP` instructions retired.
    pub inst_pop: u64,

    /// Largest number of bytes simultaneously pushed (pushes minus pops).
    pub max_stack_depth: u64,
}

impl ExecStats {
    /// Records one retired instruction.
    pub const fn record(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Halt => self.inst_halt += 1,
            Instruction::LoadImmediate { .. } => self.inst_load_immediate += 1,
            Instruction::Print { .. } => {
                self.inst_print += 1;
                self.values_printed += 1;
            }
            Instruction::Multiply { .. } => self.inst_alu += 1,
            Instruction::Push { .. } => {
                self.inst_push += 1;
                let depth = self.stack_depth();
                if depth > self.max_stack_depth {
                    self.max_stack_depth = depth;
                }
            }
            Instruction::Pop { .. } => self.inst_pop += 1,
        }
    }

    /// Current stack depth implied by the push/pop counts.
    pub const fn stack_depth(&self) -> u64 {
        self.inst_push.saturating_sub(self.inst_pop)
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for ExecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "LS-8 EXECUTION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_prints               {}", self.values_printed)?;
        writeln!(f, "stack.max_depth          {}", self.max_stack_depth)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("op.ldi", self.inst_load_immediate),
            ("op.prn", self.inst_print),
            ("op.alu", self.inst_alu),
            ("op.push", self.inst_push),
            ("op.pop", self.inst_pop),
            ("op.hlt", self.inst_halt),
        ] {
            writeln!(f, "  {name:<21}{n} ({:.2}%)", pct(n))?;
        }
        write!(f, "==========================================================")
    }
}

//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, and the run state.
//! 2. **Memory:** The 256-byte RAM the program is loaded into.
//! 3. **Observability:** Trace lines, statistics, and state dumps.

/// Fetch-decode-execute loop and instruction semantics.
pub mod execution;

/// Trace line rendering.
pub mod trace;

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::common::Result;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::sim::loader;
use crate::soc::Memory;
use crate::stats::ExecStats;

/// Macro-state of the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// Stopped by `HLT`.
    Halted,
}

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: Gpr,
    /// Program Counter.
    pub pc: usize,
    /// Main memory.
    pub ram: Memory,
    /// Current macro-state.
    pub state: RunState,

    /// Print a trace line to stderr before each instruction.
    pub trace: bool,
    /// `HLT` resets the PC to 0 instead of leaving it on the `HLT`.
    pub halt_resets_pc: bool,
    /// Execution statistics.
    pub stats: ExecStats,

    /// Stack pointer value applied on reset.
    sp_init: u8,
}

impl Cpu {
    /// Creates a CPU with zeroed memory and registers, configured by `config`.
    ///
    /// The stack pointer starts at `config.cpu.stack_pointer_init`.
    pub fn new(config: &Config) -> Self {
        let mut cpu = Self {
            regs: Gpr::new(),
            pc: 0,
            ram: Memory::new(),
            state: RunState::Running,
            trace: config.general.trace_instructions,
            halt_resets_pc: config.cpu.halt_resets_pc,
            stats: ExecStats::default(),
            sp_init: config.cpu.stack_pointer_init,
        };
        cpu.reset();
        cpu
    }

    /// Resets registers, PC, run state and statistics. Memory is kept.
    pub fn reset(&mut self) {
        self.regs = Gpr::new();
        self.regs.set_sp(self.sp_init);
        self.pc = 0;
        self.state = RunState::Running;
        self.stats.reset();
    }

    /// Copies a program image into memory at address 0.
    ///
    /// # Errors
    ///
    /// [`crate::common::Ls8Error::ProgramTooLarge`] if the image exceeds memory.
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        self.ram.load(image)?;
        debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Parses a program file and loads it into memory.
    ///
    /// Returns the number of bytes loaded.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or the program does not fit.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let image = loader::load_program_file(path)?;
        self.load(&image)?;
        Ok(image.len())
    }

    /// Current stack pointer value.
    pub fn sp(&self) -> u8 {
        self.regs.sp()
    }

    /// Whether the CPU has executed `HLT`.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Renders PC, SP, run state and the register file for error reports.
    pub fn dump_state(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "PC={:#04x} SP={:#04x} state={:?}",
            self.pc,
            self.sp(),
            self.state
        );
        let _ = write!(out, "{}", self.regs);
        out
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

//! LS-8 emulator CLI.
//!
//! This binary loads an LS-8 program file and runs it. It performs:
//! 1. **Run:** Execute the program, writing `PRN` output to stdout.
//! 2. **Listing:** With `--disasm`, print the decoded program instead of running it.
//! 3. **Diagnostics:** `--trace` trace lines and `--stats` statistics go to stderr.
//!
//! Any fault (unknown opcode, unreadable file, bad config) is reported on stderr
//! and exits with status 1.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::isa::disasm;
use ls8_core::{Config, Cpu};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "Run an LS-8 program",
    long_about = "Load an LS-8 program (one binary byte per line, `#` comments) and run it until HLT.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 --trace --stats programs/mult.ls8\n  ls8 --config legacy.json programs/stack.ls8"
)]
struct Cli {
    /// Program file to load.
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a trace line before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics after the run.
    #[arg(short, long)]
    stats: bool,

    /// Print a disassembly of the program instead of running it.
    #[arg(short, long)]
    disasm: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    if let Err(e) = cmd_run(&cli) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level.
fn init_logging(trace: bool) {
    let default = if trace { "ls8_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Loads the program and either lists or runs it.
fn cmd_run(cli: &Cli) -> ls8_core::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;

    let mut cpu = Cpu::new(&config);
    let len = cpu.load_file(&cli.program)?;

    if cli.disasm {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in disasm::listing(&cpu.ram, len) {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cpu.run(&mut out);
    out.flush()?;

    if let Err(e) = result {
        eprintln!("{}", cpu.dump_state());
        return Err(e);
    }
    if cli.stats {
        eprintln!("{}", cpu.stats);
    }
    Ok(())
}

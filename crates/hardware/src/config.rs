//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize the
//! emulator. It provides:
//! 1. **Defaults:** Baseline machine behavior (stack pointer location, HALT semantics).
//! 2. **Structures:** `general` (tracing) and `cpu` (reset state, compatibility switches).
//! 3. **Loading:** JSON documents with every field optional.
//!
//! Use `Config::default()` for standard behavior, or deserialize from JSON:
//!
//! ```
//! use ls8_core::config::Config;
//!
//! let config = Config::from_json(r#"{ "cpu": { "stack_pointer_init": 0 } }"#).unwrap();
//! assert_eq!(config.cpu.stack_pointer_init, 0);
//! assert!(!config.cpu.halt_resets_pc);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Ls8Error, Result};

/// Default configuration constants for the emulator.
mod defaults {
    use crate::common::STACK_TOP;

    /// Stack pointer value after reset.
    ///
    /// Legacy LS-8 binaries that rely on the stack starting at 0 (and wrapping
    /// to `0xFF` on the first PUSH) need this overridden to 0.
    pub const STACK_POINTER_INIT: u8 = STACK_TOP;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General emulator settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// CPU reset state and compatibility switches.
    #[serde(default)]
    pub cpu: CpuConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// [`Ls8Error::Config`] if the document is malformed or has unknown keys.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`Ls8Error::Io`] if the file cannot be read, [`Ls8Error::Config`] if it
    /// does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Ls8Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General emulator settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Print a trace line before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// CPU reset state and compatibility switches.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CpuConfig {
    /// Initial value of the stack pointer (`R7`).
    #[serde(default = "CpuConfig::default_stack_pointer_init")]
    pub stack_pointer_init: u8,

    /// Reset the PC to 0 when `HLT` executes instead of leaving it on the `HLT`.
    #[serde(default)]
    pub halt_resets_pc: bool,
}

impl CpuConfig {
    /// Returns the default stack pointer.
    const fn default_stack_pointer_init() -> u8 {
        defaults::STACK_POINTER_INIT
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            stack_pointer_init: defaults::STACK_POINTER_INIT,
            halt_resets_pc: false,
        }
    }
}

//! Program Loader.
//!
//! This module reads LS-8 programs from their text form. It performs:
//! 1. **Parsing:** One binary byte per line, `#` comments, blank lines ignored.
//! 2. **File loading:** Reads a program file from disk into a memory image.
//!
//! Parsing is permissive: a line whose content is not an 8-bit binary number is
//! skipped rather than rejected.
//!
//! ```
//! use ls8_core::sim::loader::parse_program;
//!
//! let image = parse_program("# print 8\n10000010 # LDI R0,8\n00000000\n00001000\n");
//! assert_eq!(image, vec![0b1000_0010, 0, 8]);
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Ls8Error, Result};

/// Comment marker; everything after it on a line is ignored.
const COMMENT: char = '#';

/// Parses program text into a memory image.
///
/// Each line is cut at the first `#`, trimmed, and skipped if empty. The rest
/// is parsed as a base-2 byte; lines that fail to parse are skipped.
pub fn parse_program(source: &str) -> Vec<u8> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Parses one line, returning its byte if it carries one.
fn parse_line(line: &str, lineno: usize) -> Option<u8> {
    let content = line.split(COMMENT).next().unwrap_or_default().trim();
    if content.is_empty() {
        return None;
    }
    match u8::from_str_radix(content, 2) {
        Ok(byte) => Some(byte),
        Err(e) => {
            debug!(line = lineno, text = content, "skipping malformed program line: {e}");
            None
        }
    }
}

/// Reads and parses a program file.
///
/// # Errors
///
/// [`Ls8Error::Io`] if the file cannot be read.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Ls8Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&source);
    debug!(path = %path.display(), bytes = image.len(), "parsed program");
    Ok(image)
}

//! Branch Trace Loader.
//!
//! This module reads recorded branch outcomes for offline predictor evaluation. It performs:
//! 1. **Line parsing:** One record per line, `<pc> <next_pc> <taken>`.
//! 2. **Filtering:** Blank lines and `#` comments are skipped.
//! 3. **File loading:** Reads a whole trace from disk into memory.
//!
//! Addresses are hexadecimal with an optional `0x` prefix. The direction field
//! accepts `1`/`0`, `T`/`N`, `taken`/`not_taken` and `true`/`false` (case-insensitive).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::TraceError;
use crate::common::constants::INSTRUCTION_SIZE;

/// One resolved branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchRecord {
    /// Address of the branch instruction.
    pub pc: u32,
    /// Resolved branch target.
    pub next_pc: u32,
    /// Resolved direction.
    pub taken: bool,
}

impl BranchRecord {
    /// Address fetch should have continued from: the target if taken, else `pc + 4`.
    pub const fn resolved_pc(&self) -> u32 {
        if self.taken {
            self.next_pc
        } else {
            self.pc.wrapping_add(INSTRUCTION_SIZE)
        }
    }
}

fn parse_addr(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

fn parse_taken(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "1" | "t" | "taken" | "true" => Some(true),
        "0" | "n" | "not_taken" | "false" => Some(false),
        _ => None,
    }
}

/// Parses a single trace line.
///
/// # Arguments
///
/// * `line` - Raw line text.
/// * `line_no` - One-based line number, used in error messages.
///
/// # Returns
///
/// `Ok(None)` for blank and comment-only lines.
///
/// # Errors
///
/// Returns [`TraceError::Parse`] if the line has the wrong number of fields or a
/// field cannot be parsed.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<BranchRecord>, TraceError> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let err = |reason: String| TraceError::Parse {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = content.split_whitespace().collect();
    let [pc, next_pc, taken] = fields.as_slice() else {
        return Err(err(format!("expected 3 fields, found {}", fields.len())));
    };

    let pc = parse_addr(pc).ok_or_else(|| err(format!("invalid pc `{pc}`")))?;
    let next_pc = parse_addr(next_pc).ok_or_else(|| err(format!("invalid next_pc `{next_pc}`")))?;
    let taken = parse_taken(taken).ok_or_else(|| err(format!("invalid direction `{taken}`")))?;

    Ok(Some(BranchRecord { pc, next_pc, taken }))
}

/// Parses every record from a buffered reader.
///
/// # Errors
///
/// Returns [`TraceError::Io`] on read failure or [`TraceError::Parse`] on the
/// first malformed line.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<BranchRecord>, TraceError> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(record) = parse_line(&line?, i + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Loads a trace file from disk.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be opened or read, or
/// [`TraceError::Parse`] on the first malformed line.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<BranchRecord>, TraceError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

// src/confirmation.rs
use anyhow::{Context, Result};
use std::io::Write;

pub const CONFIRMATION_LINES: [&str; 2] = [
    "Resume data structure created successfully!",
    "User can update with their specific details from the image.",
];

/// Write the confirmation lines, in order, and flush.
pub fn emit_confirmation<W: Write>(out: &mut W) -> Result<()> {
    for line in CONFIRMATION_LINES {
        writeln!(out, "{}", line).context("Failed to write confirmation")?;
    }
    out.flush().context("Failed to flush confirmation")
}

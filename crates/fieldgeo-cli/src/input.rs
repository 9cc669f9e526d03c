//! Command-line input helpers

use anyhow::{Context, Result};
use std::io::Read;

/// Resolve a positional argument, reading stdin when it is "-"
pub fn read_arg(value: &str) -> Result<String> {
    if value != "-" {
        return Ok(value.to_string());
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer).context("Failed to read from stdin")?;
    Ok(buffer.trim().to_string())
}

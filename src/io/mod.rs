//! File system helpers for the command layer.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a file's entire contents as UTF-8 text.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Write `content` to `path`, creating the file or truncating an existing
/// one. No partial-write protection: a failure mid-write can leave a
/// truncated file behind.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file {}", path.display()))
}

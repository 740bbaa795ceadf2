use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the whole input from `path`, or from stdin when no path is given.
///
/// The result has CRLF line endings folded to LF and surrounding whitespace
/// trimmed.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Error opening file: {}", path.display()))?,
        None => read_from(std::io::stdin().lock())?,
    };

    Ok(normalize(&raw))
}

/// Read everything from `reader` as UTF-8
pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Error reading input")?;
    Ok(text)
}

/// Fold line endings to `\n` and trim
pub fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n").trim().to_string()
}

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::splitter::{Boundary, Chunk};

/// Width of the divider printed between parts
const DIVIDER_WIDTH: usize = 50;

/// How line mode prints its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Numbered parts with headers and dividers
    #[default]
    Text,
    /// A single JSON document
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    max_size: usize,
    total: usize,
    chunks: Vec<JsonPart<'a>>,
}

#[derive(Serialize)]
struct JsonPart<'a> {
    part: usize,
    characters: usize,
    boundary: Boundary,
    start_offset: usize,
    end_offset: usize,
    text: &'a str,
}

/// Write `chunks` to `out` in the requested format
pub fn write_chunks<W: Write>(
    out: &mut W,
    format: OutputFormat,
    chunks: &[Chunk],
    max_size: usize,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, chunks),
        OutputFormat::Json => write_json(out, chunks, max_size),
    }
}

/// Print each part under a `PART i/N` header, then a summary line
pub fn write_text<W: Write>(out: &mut W, chunks: &[Chunk]) -> io::Result<()> {
    if chunks.is_empty() {
        return writeln!(out, "No content to split");
    }

    let total = chunks.len();
    for (i, chunk) in chunks.iter().enumerate() {
        writeln!(out, "=== PART {}/{} ===", i + 1, total)?;
        writeln!(out, "Characters: {}", chunk.metadata.char_count)?;
        writeln!(out, "---")?;
        writeln!(out, "{}", chunk.text)?;
        if i + 1 < total {
            writeln!(out, "\n{}\n", "=".repeat(DIVIDER_WIDTH))?;
        }
    }

    writeln!(out, "\n\nSummary: Split into {} parts", total)
}

pub fn write_json<W: Write>(out: &mut W, chunks: &[Chunk], max_size: usize) -> io::Result<()> {
    let report = JsonReport {
        max_size,
        total: chunks.len(),
        chunks: chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| JsonPart {
                part: i + 1,
                characters: chunk.metadata.char_count,
                boundary: chunk.metadata.boundary,
                start_offset: chunk.metadata.start_offset,
                end_offset: chunk.metadata.end_offset,
                text: &chunk.text,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::split_chunks;

    fn render(format: OutputFormat, text: &str, max_size: usize) -> String {
        let chunks = split_chunks(text, max_size).unwrap();
        let mut buf = Vec::new();
        write_chunks(&mut buf, format, &chunks, max_size).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_single_part() {
        let out = render(OutputFormat::Text, "hello world", 100);
        assert_eq!(
            out,
            "=== PART 1/1 ===\nCharacters: 11\n---\nhello world\n\n\nSummary: Split into 1 parts\n"
        );
    }

    #[test]
    fn test_text_divider_between_parts() {
        let out = render(OutputFormat::Text, "aaaa bbbb", 4);
        let divider = format!("\n{}\n\n", "=".repeat(50));

        assert!(out.starts_with("=== PART 1/2 ===\nCharacters: 4\n---\naaaa\n"));
        assert!(out.contains(&divider));
        assert!(out.contains("=== PART 2/2 ===\nCharacters: 4\n---\nbbbb\n"));
        assert_eq!(out.matches(&divider).count(), 1);
        assert!(out.ends_with("Summary: Split into 2 parts\n"));
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(render(OutputFormat::Text, "   ", 10), "No content to split\n");
    }

    #[test]
    fn test_character_count_uses_chars() {
        let out = render(OutputFormat::Text, "naïve", 10);
        assert!(out.contains("Characters: 5\n"));
    }

    #[test]
    fn test_json_report() {
        let out = render(OutputFormat::Json, "First sentence one. Second part", 20);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["max_size"], 20);
        assert_eq!(value["total"], 2);
        assert_eq!(value["chunks"][0]["part"], 1);
        assert_eq!(value["chunks"][0]["text"], "First sentence one.");
        assert_eq!(value["chunks"][0]["boundary"], "sentence");
        assert_eq!(value["chunks"][1]["boundary"], "end");
        assert_eq!(value["chunks"][1]["start_offset"], 20);
    }
}

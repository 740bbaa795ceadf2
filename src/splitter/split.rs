use serde::Serialize;
use tracing::{debug, trace};

use super::boundary::{Boundary, find_break};
use super::error::SplitError;

/// A piece of the input small enough to paste on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Trimmed text of this chunk
    pub text: String,
    /// Where the chunk came from
    pub metadata: ChunkMetadata,
}

/// Metadata for a chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkMetadata {
    /// Length in chars (Unicode scalar values)
    pub char_count: usize,
    /// Byte offset in the original input (start)
    pub start_offset: usize,
    /// Byte offset in the original input (end)
    pub end_offset: usize,
    /// Rule that ended this chunk
    pub boundary: Boundary,
}

/// Split `text` into trimmed chunks of at most `max_size` chars.
///
/// Returns an empty vector for blank input. Fails only when `max_size` is 0.
pub fn split_text(text: &str, max_size: usize) -> Result<Vec<String>, SplitError> {
    Ok(split_chunks(text, max_size)?
        .into_iter()
        .map(|chunk| chunk.text)
        .collect())
}

/// Same as [`split_text`], keeping offsets and the boundary rule for each chunk.
///
/// Lengths are counted in chars, so a hard cut never lands inside a multi-byte
/// character.
pub fn split_chunks(text: &str, max_size: usize) -> Result<Vec<Chunk>, SplitError> {
    if max_size == 0 {
        return Err(SplitError::InvalidArgument { max_size });
    }

    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    // The window ends at the byte offset of char number `max_size`; if there
    // is no such char the rest fits in one chunk.
    while let Some((window_end, _)) = remaining.char_indices().nth(max_size) {
        let (cut, boundary) = find_break(&remaining[..window_end], max_size);
        let (head, tail) = remaining.split_at(cut);

        trace!(cut, boundary = boundary.label(), "chose break point");
        chunks.push(make_chunk(text, head.trim(), boundary));
        remaining = tail.trim();
    }

    if !remaining.is_empty() {
        chunks.push(make_chunk(text, remaining, Boundary::End));
    }

    debug!(
        input_bytes = text.len(),
        max_size,
        chunks = chunks.len(),
        "split text"
    );

    Ok(chunks)
}

/// Build a chunk from a slice borrowed out of `source`
fn make_chunk(source: &str, piece: &str, boundary: Boundary) -> Chunk {
    let start_offset = piece.as_ptr() as usize - source.as_ptr() as usize;

    Chunk {
        text: piece.to_string(),
        metadata: ChunkMetadata {
            char_count: piece.chars().count(),
            start_offset,
            end_offset: start_offset + piece.len(),
            boundary,
        },
    }
}

// Public API exports
pub mod input;
pub mod logging;
pub mod output;
pub mod splitter;
pub mod tui;

// Re-export main types for convenience
pub use splitter::{
    Boundary, Chunk, ChunkMetadata, DEFAULT_CHUNK_SIZE, SplitError, split_chunks, split_text,
};

pub use output::{OutputFormat, write_chunks};

mod boundary;
mod error;
mod split;


pub use boundary::Boundary;
pub use error::SplitError;
pub use split::{Chunk, ChunkMetadata, split_chunks, split_text};

/// Default maximum characters per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 3000;

// Public API exports
pub mod config;
pub mod error;
pub mod filter;
pub mod graph;
pub mod loader;
pub mod manifest;
pub mod partitioner;
pub mod pipeline;
pub mod record;

// Re-export main types for convenience
pub use config::{DEFAULT_CHUNK_CAPACITY, DEFAULT_FILE_PREFIX, PipelineConfig};
pub use error::PipelineError;

pub use record::{ChunkFile, MergedBook, RawRecord};

pub use loader::{BookMerger, MergeStats, load_books, load_from_reader};

pub use filter::{FilterOutcome, dedup_preserving_order, filter_books};

pub use partitioner::{BookChunk, ChunkWriter, WrittenChunk, chunk_books, chunk_file_name};

pub use manifest::{MANIFEST_FILE_NAME, Manifest};

pub use graph::{BookIndex, DEFAULT_SEARCH_LIMIT, PathResult, Subgraph};

pub use pipeline::{RunSummary, run};

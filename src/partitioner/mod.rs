mod splitter;
mod writer;

#[cfg(test)]
mod tests;

pub use splitter::{BookChunk, chunk_books};
pub use writer::{ChunkWriter, WrittenChunk, chunk_file_name};

pub(crate) use writer::write_pretty_json;

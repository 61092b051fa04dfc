use super::BookChunk;
use crate::error::PipelineError;
use crate::record::MergedBook;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Borrowed view of a chunk so writing doesn't clone the books
#[derive(Serialize)]
struct ChunkFileRef<'a> {
    books: &'a [MergedBook],
}

/// Report for one file written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenChunk {
    pub index: usize,
    pub path: PathBuf,
    pub book_count: usize,
}

/// File name for the chunk with the given 1-based index ("graph-001.json")
pub fn chunk_file_name(prefix: &str, index: usize) -> String {
    format!("{}-{:03}.json", prefix, index)
}

/// Serializes chunks into a destination directory
pub struct ChunkWriter {
    output_dir: PathBuf,
    prefix: String,
}

impl ChunkWriter {
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the destination directory if it does not exist yet.
    /// Existing contents are left in place.
    pub fn prepare(&self) -> Result<(), PipelineError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| PipelineError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Full path for a chunk index
    pub fn chunk_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(chunk_file_name(&self.prefix, index))
    }

    /// Write a single chunk as pretty-printed `{"books": [...]}`
    pub fn write_chunk(&self, chunk: &BookChunk) -> Result<WrittenChunk, PipelineError> {
        let path = self.chunk_path(chunk.index);
        debug!(path = %path.display(), books = chunk.len(), "writing chunk");

        write_pretty_json(&path, &ChunkFileRef {
            books: &chunk.books,
        })
        .map_err(|source| PipelineError::WriteFile {
            path: path.clone(),
            source,
        })?;

        Ok(WrittenChunk {
            index: chunk.index,
            path,
            book_count: chunk.len(),
        })
    }

    /// Write chunks in order, reporting each one as soon as it is on disk
    pub fn write_all<F>(
        &self,
        chunks: &[BookChunk],
        mut on_written: F,
    ) -> Result<Vec<WrittenChunk>, PipelineError>
    where
        F: FnMut(&WrittenChunk),
    {
        self.prepare()?;

        let mut written = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let report = self.write_chunk(chunk)?;
            on_written(&report);
            written.push(report);
        }

        info!(
            dir = %self.output_dir.display(),
            files = written.len(),
            "chunks written"
        );

        Ok(written)
    }
}

/// Serialize `value` with a 2-space indent, replacing any existing file
pub(crate) fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.flush()
}

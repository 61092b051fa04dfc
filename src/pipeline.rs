use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::filter::filter_books;
use crate::loader::{MergeStats, load_books};
use crate::manifest::Manifest;
use crate::partitioner::{ChunkWriter, WrittenChunk, chunk_books};
use std::path::PathBuf;
use tracing::info;

/// What a finished build produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub merge: MergeStats,
    /// Books that made it into the output
    pub surviving: usize,
    /// Distinct titles dropped for having no similar books
    pub removed: usize,
    pub chunks: Vec<WrittenChunk>,
    pub manifest_path: Option<PathBuf>,
}

/// Load, merge, filter and write one dataset.
///
/// `on_filtered` fires once the survivor counts are known and
/// `on_written` once per chunk file, in chunk order, right after it is
/// flushed to disk.
pub fn run<S, W>(
    config: &PipelineConfig,
    on_filtered: S,
    on_written: W,
) -> Result<RunSummary, PipelineError>
where
    S: FnOnce(usize, usize),
    W: FnMut(&WrittenChunk),
{
    config.validate()?;

    let merger = load_books(&config.input)?;
    let (books, merge) = merger.finish();

    let outcome = filter_books(books);
    let surviving = outcome.surviving();
    let removed = outcome.removed;
    info!(surviving, removed, "filtered books without similar_books");
    on_filtered(surviving, removed);

    let chunks = chunk_books(outcome.books, config.chunk_capacity);
    let writer = ChunkWriter::new(&config.output_dir, config.file_prefix.as_str());
    let written = writer.write_all(&chunks, on_written)?;

    let manifest_path = if config.write_manifest {
        let manifest = Manifest::build(
            &config.input,
            config.chunk_capacity,
            merge,
            removed,
            &written,
        )?;
        Some(manifest.write_to_dir(writer.output_dir())?)
    } else {
        None
    };

    Ok(RunSummary {
        merge,
        surviving,
        removed,
        chunks: written,
        manifest_path,
    })
}

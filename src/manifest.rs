use crate::error::PipelineError;
use crate::loader::MergeStats;
use crate::partitioner::{WrittenChunk, write_pretty_json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub source_path: String,
    pub chunk_capacity: usize,
    pub stats: ManifestStats,
    pub chunks: Vec<ManifestChunk>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestStats {
    pub records_read: usize,
    pub skipped_untitled: usize,
    pub distinct_titles: usize,
    pub surviving: usize,
    pub removed: usize,
    pub chunk_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestChunk {
    pub file: String,
    pub book_count: usize,
    pub sha256: String,
}

impl Manifest {
    /// Describe a finished run, hashing every chunk file it produced
    pub fn build(
        source_path: &Path,
        chunk_capacity: usize,
        merge: MergeStats,
        removed: usize,
        written: &[WrittenChunk],
    ) -> Result<Self, PipelineError> {
        let chunks = written
            .iter()
            .map(|chunk| -> Result<ManifestChunk, PipelineError> {
                Ok(ManifestChunk {
                    file: chunk
                        .path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    book_count: chunk.book_count,
                    sha256: file_sha256(&chunk.path)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("bookgraph v{}", env!("CARGO_PKG_VERSION")),
            source_path: source_path.display().to_string(),
            chunk_capacity,
            stats: ManifestStats {
                records_read: merge.records_read,
                skipped_untitled: merge.skipped_untitled,
                distinct_titles: merge.distinct_titles,
                surviving: written.iter().map(|c| c.book_count).sum(),
                removed,
                chunk_count: written.len(),
            },
            chunks,
        })
    }

    /// Write as `manifest.json` inside `output_dir`
    pub fn write_to_dir(&self, output_dir: &Path) -> Result<PathBuf, PipelineError> {
        let path = output_dir.join(MANIFEST_FILE_NAME);
        write_pretty_json(&path, self).map_err(|source| PipelineError::WriteFile {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn file_sha256(path: &Path) -> Result<String, PipelineError> {
    let bytes = fs::read(path).map_err(|source| PipelineError::ChunkRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_describes_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let chunk_path = dir.path().join("graph-001.json");
        fs::write(&chunk_path, "abc").unwrap();

        let written = vec![WrittenChunk {
            index: 1,
            path: chunk_path,
            book_count: 4,
        }];
        let merge = MergeStats {
            records_read: 10,
            skipped_untitled: 1,
            distinct_titles: 6,
        };

        let manifest = Manifest::build(Path::new("in.json"), 50, merge, 2, &written).unwrap();

        assert_eq!(manifest.stats.surviving, 4);
        assert_eq!(manifest.stats.removed, 2);
        assert_eq!(manifest.stats.chunk_count, 1);
        assert_eq!(manifest.chunks[0].file, "graph-001.json");
        // sha256("abc")
        assert_eq!(
            manifest.chunks[0].sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(manifest.generator.starts_with("bookgraph v"));

        let written_path = manifest.write_to_dir(dir.path()).unwrap();
        let text = fs::read_to_string(written_path).unwrap();
        let parsed: Manifest = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_missing_chunk_file_errors() {
        let written = vec![WrittenChunk {
            index: 1,
            path: PathBuf::from("/nonexistent/graph-001.json"),
            book_count: 1,
        }];
        let result = Manifest::build(Path::new("in.json"), 1, MergeStats::default(), 0, &written);
        assert!(matches!(result, Err(PipelineError::ChunkRead { .. })));
    }
}

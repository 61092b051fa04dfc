use crate::error::PipelineError;
use std::path::PathBuf;

/// Maximum number of books per output file
pub const DEFAULT_CHUNK_CAPACITY: usize = 50_000;

/// File name prefix for output chunks ("graph-001.json")
pub const DEFAULT_FILE_PREFIX: &str = "graph";

pub const DEFAULT_INPUT: &str = "goodreads_books.json";
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Settings for a single build run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Line-delimited JSON source
    pub input: PathBuf,
    /// Destination directory for chunk files
    pub output_dir: PathBuf,
    /// Books per chunk
    pub chunk_capacity: usize,
    /// Chunk file name prefix
    pub file_prefix: String,
    /// Also write manifest.json next to the chunks
    pub write_manifest: bool,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn chunk_capacity(mut self, capacity: usize) -> Self {
        self.chunk_capacity = capacity;
        self
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn write_manifest(mut self, enabled: bool) -> Self {
        self.write_manifest = enabled;
        self
    }

    /// Reject settings that would produce no usable output
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.chunk_capacity == 0 {
            return Err(PipelineError::InvalidConfig(
                "chunk capacity must be at least 1".to_string(),
            ));
        }
        if self.file_prefix.is_empty() {
            return Err(PipelineError::InvalidConfig(
                "file prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            write_manifest: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.input, PathBuf::from("goodreads_books.json"));
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.chunk_capacity, 50_000);
        assert_eq!(config.file_prefix, "graph");
        assert!(!config.write_manifest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = PipelineConfig::new("in.jsonl", "out")
            .chunk_capacity(10)
            .file_prefix("books")
            .write_manifest(true);

        assert_eq!(config.input, PathBuf::from("in.jsonl"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.chunk_capacity, 10);
        assert_eq!(config.file_prefix, "books");
        assert!(config.write_manifest);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = PipelineConfig::default().chunk_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(PipelineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = PipelineConfig::default().file_prefix("");
        assert!(config.validate().is_err());
    }
}

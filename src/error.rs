use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to open input {path}: {source}")]
    InputAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input line {line}: {source}")]
    InputRead {
        line: usize,
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read chunk file {path}: {source}")]
    ChunkRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid chunk file {path}: {source}")]
    ChunkParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

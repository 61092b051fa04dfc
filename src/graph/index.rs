use crate::error::PipelineError;
use crate::record::{ChunkFile, MergedBook};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// In-memory lookup over every book in a set of chunk files
#[derive(Debug, Default)]
pub struct BookIndex {
    /// All books in load order
    books: Vec<MergedBook>,
    /// book_id -> position in `books`
    by_id: HashMap<String, usize>,
    /// lower-cased title -> book_id
    by_title: HashMap<String, String>,
}

impl BookIndex {
    /// Build an index from books already in memory.
    /// A repeated book_id or title replaces the earlier entry in the lookups.
    pub fn from_books(books: Vec<MergedBook>) -> Self {
        let mut by_id = HashMap::with_capacity(books.len());
        let mut by_title = HashMap::with_capacity(books.len());

        for (position, book) in books.iter().enumerate() {
            by_id.insert(book.book_id.clone(), position);
            by_title.insert(book.title.to_lowercase(), book.book_id.clone());
        }

        Self {
            books,
            by_id,
            by_title,
        }
    }

    /// Load every `<prefix>-NNN.json` file in `dir`, in chunk-number order
    pub fn load_dir(dir: &Path, prefix: &str) -> Result<Self, PipelineError> {
        let mut books = Vec::new();

        for path in chunk_files(dir, prefix)? {
            let text = fs::read_to_string(&path).map_err(|source| PipelineError::ChunkRead {
                path: path.clone(),
                source,
            })?;
            let chunk: ChunkFile =
                serde_json::from_str(&text).map_err(|source| PipelineError::ChunkParse {
                    path: path.clone(),
                    source,
                })?;

            debug!(path = %path.display(), books = chunk.books.len(), "loaded chunk");
            books.extend(chunk.books);
        }

        info!(dir = %dir.display(), books = books.len(), "book index loaded");
        Ok(Self::from_books(books))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books in load order
    pub fn books(&self) -> &[MergedBook] {
        &self.books
    }

    pub fn get(&self, book_id: &str) -> Option<&MergedBook> {
        self.by_id.get(book_id).map(|&position| &self.books[position])
    }

    pub fn contains(&self, book_id: &str) -> bool {
        self.by_id.contains_key(book_id)
    }

    /// Exact, case-insensitive title lookup
    pub fn find_by_title(&self, title: &str) -> Option<&MergedBook> {
        self.by_title
            .get(&title.to_lowercase())
            .and_then(|book_id| self.get(book_id))
    }

    /// Case-insensitive title search.
    ///
    /// An exact match jumps to the front; prefix and substring matches follow
    /// in load order. Scanning stops after `2 * limit` candidates.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&MergedBook> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut results: Vec<&MergedBook> = Vec::new();

        for book in &self.books {
            let title = book.title.to_lowercase();

            if title == needle {
                results.insert(0, book);
            } else if title.contains(&needle) {
                results.push(book);
            }

            if results.len() >= limit.saturating_mul(2) {
                break;
            }
        }

        results.truncate(limit);
        results
    }
}

/// Chunk files for `prefix` directly inside `dir`, sorted by chunk number
fn chunk_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, PipelineError> {
    let mut numbered = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| PipelineError::ChunkRead {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if let Some(number) = chunk_number(&name, prefix) {
            numbered.push((number, entry.path().to_path_buf()));
        }
    }

    numbered.sort_by_key(|(number, _)| *number);
    Ok(numbered.into_iter().map(|(_, path)| path).collect())
}

/// Parse the chunk number out of "<prefix>-NNN.json"
fn chunk_number(file_name: &str, prefix: &str) -> Option<usize> {
    let digits = file_name
        .strip_prefix(prefix)?
        .strip_prefix('-')?
        .strip_suffix(".json")?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_number_parsing() {
        assert_eq!(chunk_number("graph-001.json", "graph"), Some(1));
        assert_eq!(chunk_number("graph-1000.json", "graph"), Some(1000));
        assert_eq!(chunk_number("graph-.json", "graph"), None);
        assert_eq!(chunk_number("graph-01a.json", "graph"), None);
        assert_eq!(chunk_number("manifest.json", "graph"), None);
        assert_eq!(chunk_number("graph-001.json.bak", "graph"), None);
        assert_eq!(chunk_number("books-001.json", "graph"), None);
    }
}

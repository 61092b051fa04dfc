use super::RawRecord;
use serde::{Deserialize, Serialize};

/// Canonical per-title book produced by merging every record sharing a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedBook {
    pub book_id: String,
    pub title: String,
    pub url: String,
    pub image_url: String,
    pub similar_books: Vec<String>,
}

impl MergedBook {
    /// Start a new merged book from the first record seen for its title
    pub fn from_record(record: RawRecord) -> Self {
        Self {
            book_id: record.book_id,
            title: record.title,
            url: record.url,
            image_url: record.image_url,
            similar_books: record.similar_books,
        }
    }

    /// Fold a later record with the same title into this book.
    ///
    /// - `book_id`, `title` and `url` keep their first-seen values
    /// - `image_url` is filled only while still empty
    /// - `similar_books` is appended as-is; duplicates are removed later
    pub fn absorb(&mut self, record: RawRecord) {
        if self.image_url.is_empty() && !record.image_url.is_empty() {
            self.image_url = record.image_url;
        }

        self.similar_books.extend(record.similar_books);
    }
}

/// On-disk shape of one output chunk: `{"books": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkFile {
    pub books: Vec<MergedBook>,
}

use crate::record::MergedBook;

/// A group of consecutive books destined for one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookChunk {
    /// 1-based sequence number used in the file name
    pub index: usize,
    pub books: Vec<MergedBook>,
}

impl BookChunk {
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Split books into chunks of at most `capacity` entries:
/// - Relative order is preserved across and within chunks
/// - Only the last chunk may be short
/// - No chunk is produced for an empty input
///
/// A `capacity` of zero is treated as one.
pub fn chunk_books(books: Vec<MergedBook>, capacity: usize) -> Vec<BookChunk> {
    let capacity = capacity.max(1);
    let mut chunks = Vec::with_capacity(books.len().div_ceil(capacity));
    let mut current: Vec<MergedBook> = Vec::with_capacity(capacity.min(books.len()));

    for book in books {
        current.push(book);

        if current.len() >= capacity {
            let full = std::mem::take(&mut current);
            chunks.push(BookChunk {
                index: chunks.len() + 1,
                books: full,
            });
        }
    }

    // Flush the short tail
    if !current.is_empty() {
        chunks.push(BookChunk {
            index: chunks.len() + 1,
            books: current,
        });
    }

    chunks
}

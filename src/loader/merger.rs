use crate::record::{MergedBook, RawRecord};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

/// Counters collected while merging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Every parsed line, titled or not
    pub records_read: usize,
    /// Lines dropped for an empty or missing title
    pub skipped_untitled: usize,
    /// Distinct non-empty titles
    pub distinct_titles: usize,
}

/// Groups records by title, keeping titles in first-seen order
#[derive(Debug, Default)]
pub struct BookMerger {
    books: IndexMap<String, MergedBook>,
    records_read: usize,
    skipped_untitled: usize,
}

impl BookMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one record into the title map
    pub fn ingest(&mut self, record: RawRecord) {
        self.records_read += 1;

        if !record.has_title() {
            self.skipped_untitled += 1;
            return;
        }

        match self.books.entry(record.title.clone()) {
            Entry::Occupied(mut entry) => {
                debug!(title = %record.title, "merging duplicate title");
                entry.get_mut().absorb(record);
            }
            Entry::Vacant(entry) => {
                entry.insert(MergedBook::from_record(record));
            }
        }
    }

    /// Look up the current merged state for a title
    pub fn get(&self, title: &str) -> Option<&MergedBook> {
        self.books.get(title)
    }

    /// Number of distinct titles so far
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn stats(&self) -> MergeStats {
        MergeStats {
            records_read: self.records_read,
            skipped_untitled: self.skipped_untitled,
            distinct_titles: self.books.len(),
        }
    }

    /// Consume the merger, yielding books in first-seen title order
    pub fn finish(self) -> (Vec<MergedBook>, MergeStats) {
        let stats = self.stats();
        (self.books.into_values().collect(), stats)
    }
}

use crate::record::MergedBook;
use std::collections::HashSet;
use std::hash::Hash;


/// Result of the filter stage
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Surviving books in first-seen title order
    pub books: Vec<MergedBook>,
    /// Distinct titles dropped for having no similar books
    pub removed: usize,
}

impl FilterOutcome {
    pub fn surviving(&self) -> usize {
        self.books.len()
    }
}

/// Remove duplicates while keeping the first occurrence of each item
pub fn dedup_preserving_order<T>(items: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Deduplicate every book's similar list and drop books left with none
pub fn filter_books(books: Vec<MergedBook>) -> FilterOutcome {
    let total = books.len();

    let books: Vec<MergedBook> = books
        .into_iter()
        .filter_map(|mut book| {
            book.similar_books = dedup_preserving_order(book.similar_books);
            (!book.similar_books.is_empty()).then_some(book)
        })
        .collect();

    FilterOutcome {
        removed: total - books.len(),
        books,
    }
}

mod merger;
mod reader;


pub use merger::{BookMerger, MergeStats};
pub use reader::{load_books, load_from_reader};

mod book;
mod raw;


pub use book::{ChunkFile, MergedBook};
pub use raw::RawRecord;

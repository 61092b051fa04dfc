//! Read-side of the chunk files: look books up, search titles and find how
//! two books connect through their similar-book lists.

mod index;
mod path;
mod subgraph;


pub use index::BookIndex;
pub use path::PathResult;
pub use subgraph::{
    GraphLink, GraphNode, MAX_NEIGHBOURS_PER_NODE, MAX_TOTAL_NEIGHBOURS, Subgraph,
};

/// Default number of search results
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

pub mod eval;
pub mod minimax;
pub mod pst;

pub use minimax::{SearchParams, SearchResult, Searcher};

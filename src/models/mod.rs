// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod excerpt;
pub mod search_result;

pub use excerpt::{ContextBundle, ExcerptStatus, SourceExcerpt};
pub use search_result::SearchResult;

// file: src/extractor/mod.rs
// description: page text extraction module exports
// reference: internal module structure

pub mod page;
pub mod sentences;

pub use page::PageExtractor;
pub use sentences::{SentenceExtractor, split_sentences, visible_text};

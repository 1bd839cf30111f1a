// file: src/query/mod.rs
// description: query classification module exports
// reference: internal module structure

pub mod classifier;
pub mod patterns;

pub use classifier::{Classification, QueryClassifier, SearchTrigger};

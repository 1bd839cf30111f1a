// file: src/formatter/mod.rs
// description: answer post-processing module exports
// reference: internal module structure

pub mod markdown;

pub use markdown::ResponseFormatter;

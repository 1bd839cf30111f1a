// file: src/models/excerpt.rs
// description: Per-source excerpts and the context bundle handed to the generator
// reference: context assembly for retrieval augmented answers

use crate::models::SearchResult;
use serde::{Deserialize, Serialize};

/// Why an excerpt holds the text it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExcerptStatus {
    Extracted,
    NoQualifyingSentences,
    FetchFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceExcerpt {
    pub title: String,
    pub link: String,
    pub excerpt: String,
    pub status: ExcerptStatus,
}

impl SourceExcerpt {
    pub fn extracted(result: &SearchResult, excerpt: String) -> Self {
        let status = if excerpt.is_empty() {
            ExcerptStatus::NoQualifyingSentences
        } else {
            ExcerptStatus::Extracted
        };

        Self {
            title: result.title.clone(),
            link: result.link.clone(),
            excerpt,
            status,
        }
    }

    pub fn failed(result: &SearchResult, reason: impl Into<String>) -> Self {
        Self {
            title: result.title.clone(),
            link: result.link.clone(),
            excerpt: String::new(),
            status: ExcerptStatus::FetchFailed(reason.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.excerpt.is_empty()
    }

    pub fn render(&self) -> String {
        format!("Source: {}\n{}\n\n", self.title, self.excerpt)
    }
}

/// Ordered excerpts, one per search result. Overlapping content is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBundle {
    pub sources: Vec<SourceExcerpt>,
}

impl ContextBundle {
    pub fn new(sources: Vec<SourceExcerpt>) -> Self {
        Self { sources }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn non_empty_excerpts(&self) -> usize {
        self.sources.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn render(&self) -> String {
        self.sources.iter().map(SourceExcerpt::render).collect()
    }
}

// file: src/pipeline/context.rs
// description: turns search results into an ordered context bundle
// reference: order-preserving buffered fan-out with futures streams

use crate::extractor::PageExtractor;
use crate::models::{ContextBundle, SearchResult};
use crate::pipeline::progress::QuerySpinner;
use crate::utils::validation::Validator;
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

pub struct ContextAssembler {
    extractor: PageExtractor,
    concurrency: usize,
}

impl ContextAssembler {
    pub fn new(extractor: PageExtractor, concurrency: usize) -> Self {
        Self {
            extractor,
            concurrency: concurrency.max(1),
        }
    }

    pub fn extractor(&self) -> &PageExtractor {
        &self.extractor
    }

    /// One excerpt per result, in result order. Pages that fail to load
    /// contribute an empty excerpt.
    pub async fn assemble(&self, query: &str, results: &[SearchResult]) -> ContextBundle {
        self.assemble_tracked(query, results, None).await
    }

    pub async fn assemble_tracked(
        &self,
        query: &str,
        results: &[SearchResult],
        spinner: Option<&QuerySpinner>,
    ) -> ContextBundle {
        info!(
            "Reading {} sources for \"{}\" ({} at a time)",
            results.len(),
            Validator::truncate_text(query, 80),
            self.concurrency
        );

        let total = results.len();
        let mut done = 0;

        // Futures are collected up front so the returned future stays Send.
        let pending: Vec<_> = results
            .iter()
            .map(|result| self.extractor.excerpt_for(result))
            .collect();

        let sources = stream::iter(pending)
            .buffered(self.concurrency)
            .inspect(|excerpt| {
                done += 1;
                debug!("Source {}/{}: {:?}", done, total, excerpt.status);
                if let Some(spinner) = spinner {
                    spinner.set_stage(format!("Read {}/{}: {}", done, total, excerpt.title));
                }
            })
            .collect::<Vec<_>>()
            .await;

        ContextBundle::new(sources)
    }
}

// file: src/pipeline/progress.rs
// description: per-query spinner and statistics reporting
// reference: uses indicatif for progress display and tracks query metrics

use crate::models::ContextBundle;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryStats {
    pub sources: usize,
    pub non_empty_excerpts: usize,
    pub context_chars: usize,
    pub elapsed_ms: u64,
}

impl QueryStats {
    pub fn from_bundle(bundle: &ContextBundle, context_chars: usize, started: Instant) -> Self {
        Self {
            sources: bundle.len(),
            non_empty_excerpts: bundle.non_empty_excerpts(),
            context_chars,
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }

    pub fn extraction_rate(&self) -> f64 {
        if self.sources == 0 {
            return 0.0;
        }
        (self.non_empty_excerpts as f64 / self.sources as f64) * 100.0
    }
}

/// Spinner shown while a query is in flight.
pub struct QuerySpinner {
    bar: ProgressBar,
}

impl QuerySpinner {
    pub fn new(colored: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style(colored));
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn set_stage(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for QuerySpinner {
    fn drop(&mut self) {
        self.finish();
    }
}

fn spinner_style(colored: bool) -> ProgressStyle {
    let template = if colored {
        "{spinner:.green} [{elapsed}] {msg}"
    } else {
        "{spinner} [{elapsed}] {msg}"
    };

    ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod assistant;
pub mod context;
pub mod progress;

pub use assistant::{Assistant, AssistantReply, NO_RESULTS_MESSAGE, Route};
pub use context::ContextAssembler;
pub use progress::{QuerySpinner, QueryStats};

//! Process-wide read-only state shared across request handlers.

use crate::pipeline::InferencePipeline;

/// Loaded once at startup and passed to handlers behind an `Arc`. Nothing in
/// here mutates after construction, so concurrent reads need no locking.
pub struct AppState {
    pub pipeline: InferencePipeline,
    pub static_dir: String,
}

impl AppState {
    pub fn new(pipeline: InferencePipeline, static_dir: String) -> Self {
        Self {
            pipeline,
            static_dir,
        }
    }
}

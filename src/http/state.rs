use std::sync::Arc;

use crate::pipeline::Pipeline;

/// Shared state handed to every handler
pub struct AppState<D, R> {
    pub pipeline: Arc<Pipeline<D, R>>,
}

impl<D, R> AppState<D, R> {
    pub fn new(pipeline: Pipeline<D, R>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

// Derived Clone would require D: Clone and R: Clone
impl<D, R> Clone for AppState<D, R> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

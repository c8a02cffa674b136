use std::sync::Arc;
use std::time::Instant;
use telemetry_core::Dataset;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub message: Arc<str>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Dataset, message: impl Into<Arc<str>>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            message: message.into(),
            start_time: Instant::now(),
        }
    }
}

// tests/support/mocks/telemetry.rs
use async_trait::async_trait;
use curricula_core::application::{
    ApplicationError, ApplicationResult,
    ports::telemetry::{ViewEvent, ViewTracker},
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tracker whose store is always down.
#[derive(Default)]
pub struct FailingViewTracker {
    attempts: AtomicUsize,
}

impl FailingViewTracker {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewTracker for FailingViewTracker {
    async fn record(&self, _event: ViewEvent) -> ApplicationResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ApplicationError::infrastructure("view store unavailable"))
    }
}

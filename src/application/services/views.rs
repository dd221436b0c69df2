use crate::application::ports::telemetry::{ViewEvent, ViewTracker};

/// Records a view without letting a tracking failure reach the reader.
pub async fn record_best_effort(tracker: &dyn ViewTracker, event: ViewEvent) {
    let target = event.target;
    if let Err(err) = tracker.record(event).await {
        tracing::warn!(
            error = %err,
            target = target.kind(),
            target_id = target.id(),
            "failed to record view"
        );
    }
}

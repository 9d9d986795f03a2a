//! Logging infrastructure for structured console output.

mod logger;
mod subscriber;

pub use logger::Logger;
pub use subscriber::init_subscriber;

/// Run `f` with a thread-local subscriber that records every event, and
/// return the recorded `(level, target, message)` triples.
#[cfg(test)]
pub(crate) fn capture_events(f: impl FnOnce()) -> Vec<(tracing::Level, String, String)> {
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt as _;

    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = subscriber::CaptureLayer::new(Arc::clone(&events));
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone();
    captured
}

use std::time::Duration;

/// Context for one scheduled retry of a logical call.
#[derive(Clone, Debug)]
pub struct RetryEvent {
    /// Full request URL.
    pub url: String,
    /// Status code of the transient response.
    pub status: u16,
    /// Attempts already dispatched for this logical call.
    pub attempt: u32,
    /// Retries allowed after the initial attempt for this failure class.
    pub max_retries: u32,
    /// Wait before the next attempt.
    pub delay: Duration,
}

/// Diagnostic hooks for the request pipeline.
///
/// Installed via [`SpaceTradersClient::with_observer`]; the default
/// implementation drops every event, so tests install their own recorder to
/// assert on retry behavior instead of scraping log output.
///
/// [`SpaceTradersClient::with_observer`]: crate::SpaceTradersClient::with_observer
pub trait RequestObserver: Send + Sync {
    /// A transient response was received and a retry has been scheduled.
    fn on_retry(&self, event: &RetryEvent) {
        let _ = event;
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {}

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Serializes dispatches from one client and enforces a minimum
/// start-to-start spacing between them.
///
/// Tasks run strictly in submission order with at most one in flight. The
/// gap is measured from dispatch start to dispatch start: a task that
/// outlives the spacing floor lets its successor begin immediately, while a
/// task that finishes early delays its successor until the floor elapses.
///
/// The scheduler never interprets, times out or cancels a task — it forwards
/// the task's output untouched.
#[derive(Debug)]
pub struct RequestScheduler {
    min_spacing: Duration,
    // Start instant of the previous dispatch. The tokio mutex is FIFO-fair,
    // which is what keeps submission order; the guard is held across the
    // task await, which is what caps in-flight dispatches at one.
    last_dispatch: Mutex<Option<Instant>>,
}

impl RequestScheduler {
    pub fn new(min_spacing: Duration) -> Self {
        Self {
            min_spacing,
            last_dispatch: Mutex::new(None),
        }
    }

    /// Runs `task` once its turn comes up and the spacing floor has elapsed.
    pub async fn run<T, F, Fut>(&self, task: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut last_dispatch = self.last_dispatch.lock().await;
        if let Some(previous) = *last_dispatch {
            sleep_until(previous + self.min_spacing).await;
        }
        *last_dispatch = Some(Instant::now());
        task().await
    }
}

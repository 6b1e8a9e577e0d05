use std::time::Duration;

use reqwest::{header, StatusCode};

use crate::ClientOptions;

/// Transient failure class, each with its own retry budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RetryClass {
    /// 500 from the API.
    ServerError,
    /// 429 from the API.
    RateLimited,
}

impl RetryClass {
    /// Retries allowed after the initial attempt for this class.
    pub(crate) fn budget(self, options: &ClientOptions) -> u32 {
        match self {
            Self::ServerError => options.server_error_retries,
            Self::RateLimited => options.rate_limit_retries,
        }
    }
}

/// Outcome category for one raw response.
///
/// The classifier looks at status and headers only; whoever holds the
/// response decides what to do with the body afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// Status < 400. The body carries the expected payload.
    Success,
    /// Status 401. Fatal regardless of attempt count.
    AuthRejected,
    /// Status 429 or 500. Wait `delay` before the next attempt.
    Transient { class: RetryClass, delay: Duration },
    /// Any other status >= 400. The body carries the failure envelope.
    Fatal,
}

pub(crate) fn classify(
    status: StatusCode,
    headers: &header::HeaderMap,
    default_backoff: Duration,
) -> Disposition {
    if status.as_u16() < 400 {
        return Disposition::Success;
    }
    match status {
        StatusCode::UNAUTHORIZED => Disposition::AuthRejected,
        StatusCode::INTERNAL_SERVER_ERROR => Disposition::Transient {
            class: RetryClass::ServerError,
            delay: retry_after(headers).unwrap_or(default_backoff),
        },
        StatusCode::TOO_MANY_REQUESTS => Disposition::Transient {
            class: RetryClass::RateLimited,
            delay: retry_after(headers).unwrap_or(default_backoff),
        },
        _ => Disposition::Fatal,
    }
}

/// Reads `Retry-After` as a whole number of seconds.
///
/// The API only ever sends the integer-seconds form; an HTTP-date value is
/// treated as absent.
fn retry_after(headers: &header::HeaderMap) -> Option<Duration> {
    let value = headers.get(header::RETRY_AFTER)?.to_str().ok()?;
    let seconds = value.trim().parse::<u64>().ok()?;
    Some(Duration::from_secs(seconds))
}

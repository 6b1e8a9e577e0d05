/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum SpaceTradersError {
    /// Credentials were rejected with a 401. Never retried; callers are
    /// expected to invalidate their stored session.
    #[error("Invalid username or token.")]
    Auth,
    /// Terminal non-success response, carrying the server's own message.
    ///
    /// 429 and 500 responses end up here once their retry budget is spent;
    /// every other status >= 400 lands here on the first attempt.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },
    /// Network or request execution error from `reqwest` — connection
    /// refused, DNS failure, timeout. No HTTP response was received.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Success response whose body did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),
}

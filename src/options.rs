/// Configures HTTP timeout, dispatch pacing and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Minimum time between the start of two consecutive dispatches, in
    /// milliseconds. Applies to retries as much as to fresh calls.
    pub min_spacing_ms: u64,
    /// Maximum number of retries after the initial attempt for a 500.
    pub server_error_retries: u32,
    /// Maximum number of retries after the initial attempt for a 429.
    pub rate_limit_retries: u32,
    /// Backoff in milliseconds when the server sends no `Retry-After`.
    pub default_backoff_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            min_spacing_ms: 500,
            server_error_retries: 5,
            rate_limit_retries: 3,
            default_backoff_ms: 1_000,
        }
    }
}

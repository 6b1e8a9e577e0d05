use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::sleep;

use crate::{
    classify::{classify, Disposition},
    observe::{NoopObserver, RequestObserver, RetryEvent},
    scheduler::RequestScheduler,
    wire::FailureEnvelope,
    ClientOptions, Result, SpaceTradersError,
};

const BASE_URL: &str = "https://api.spacetraders.io";

/// Whether a dispatch carries the bearer credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Auth {
    Bearer,
    Anonymous,
}

/// HTTP client for the SpaceTraders game API.
///
/// Every operation — fresh calls and retries alike, authenticated or not —
/// funnels through one [`RequestScheduler`], so the server sees a single
/// paced request stream per client. Clones share the scheduler and the
/// credential; create separate clients only for separate sessions.
#[derive(Clone)]
pub struct SpaceTradersClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    authorization: String,
    options: ClientOptions,
    scheduler: Arc<RequestScheduler>,
    observer: Arc<dyn RequestObserver>,
}

impl fmt::Debug for SpaceTradersClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceTradersClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("authorization", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl SpaceTradersClient {
    /// Creates a client bound to one `(username, token)` credential pair.
    ///
    /// If the token is missing the `Bearer ` prefix, it is added
    /// automatically.
    pub fn new(username: impl Into<String>, token: impl AsRef<str>) -> Self {
        let options = ClientOptions::default();
        Self {
            http: reqwest::Client::new(),
            base_url: BASE_URL.to_owned(),
            username: username.into(),
            authorization: bearer_authorization(token.as_ref()),
            scheduler: Arc::new(RequestScheduler::new(Duration::from_millis(
                options.min_spacing_ms,
            ))),
            observer: Arc::new(NoopObserver),
            options,
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `SPACETRADERS_USERNAME` — the username the credential is bound to
    /// - `SPACETRADERS_TOKEN` — access token (Bearer prefix optional)
    ///
    /// Returns an error if either variable is missing or empty.
    pub fn from_env() -> std::result::Result<Self, String> {
        let username = std::env::var("SPACETRADERS_USERNAME")
            .map_err(|_| "missing SPACETRADERS_USERNAME environment variable".to_owned())?;
        let token = std::env::var("SPACETRADERS_TOKEN")
            .map_err(|_| "missing SPACETRADERS_TOKEN environment variable".to_owned())?;
        if username.trim().is_empty() {
            return Err("SPACETRADERS_USERNAME is set but empty".to_owned());
        }
        if token.trim().is_empty() {
            return Err("SPACETRADERS_TOKEN is set but empty".to_owned());
        }
        Ok(Self::new(username.trim(), token))
    }

    /// Points the client at a different host. Trailing slashes are trimmed.
    ///
    /// Useful for test servers; the default is the live API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Applies client options such as timeout, pacing and retry budgets.
    ///
    /// The spacing floor lives inside the scheduler, so the scheduler is
    /// rebuilt; call this before sharing the client across tasks.
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.scheduler = Arc::new(RequestScheduler::new(Duration::from_millis(
            options.min_spacing_ms,
        )));
        self.options = options;
        self
    }

    /// Installs a diagnostics observer for retry events.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Username the credential is bound to.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Performs one authenticated logical call through the full pipeline:
    /// scheduler, bounded retries, classification, body decode.
    ///
    /// A payload supplied with a GET is accepted but never sent; only
    /// POST/PUT serialize it as the JSON body.
    pub async fn invoke<T, P>(
        &self,
        method: Method,
        url: impl Into<String>,
        payload: Option<&P>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request_with_retry(method, &url.into(), payload, Auth::Bearer)
            .await
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        self.request_with_retry(Method::GET, &url, None::<&()>, Auth::Bearer)
            .await
    }

    pub(crate) async fn post<T, P>(&self, url: String, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request_with_retry(Method::POST, &url, Some(payload), Auth::Bearer)
            .await
    }

    pub(crate) async fn put<T, P>(&self, url: String, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request_with_retry(Method::PUT, &url, Some(payload), Auth::Bearer)
            .await
    }

    pub(crate) async fn get_anonymous<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        self.request_with_retry(Method::GET, &url, None::<&()>, Auth::Anonymous)
            .await
    }

    pub(crate) async fn post_anonymous<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        self.request_with_retry(Method::POST, &url, None::<&()>, Auth::Anonymous)
            .await
    }

    /// Bounded retry loop for one logical call.
    ///
    /// `attempt` counts dispatches already made; it never exceeds the failing
    /// class's budget. Past the budget the last response falls through to the
    /// generic fatal path and its body supplies the error message.
    async fn request_with_retry<T, P>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&P>,
        auth: Auth,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let default_backoff = Duration::from_millis(self.options.default_backoff_ms);
        let mut attempt: u32 = 0;
        loop {
            // A retry is just another scheduled dispatch: it queues behind
            // whatever else this client has pending and re-consumes a
            // spacing slot, so the pacing floor holds even while backing
            // off from a rate-limit error.
            let response = self
                .scheduler
                .run(|| self.dispatch_once(&method, url, payload, auth))
                .await
                .map_err(SpaceTradersError::Transport)?;

            let status = response.status();
            let disposition = classify(status, response.headers(), default_backoff);
            match disposition {
                Disposition::Success => {
                    let body = response.text().await.map_err(SpaceTradersError::Transport)?;
                    return serde_json::from_str::<T>(&body).map_err(|err| {
                        SpaceTradersError::Decode(format!(
                            "invalid response JSON: {err}; body: {body}"
                        ))
                    });
                }
                Disposition::AuthRejected => return Err(SpaceTradersError::Auth),
                Disposition::Transient { class, delay }
                    if attempt < class.budget(&self.options) =>
                {
                    self.observer.on_retry(&RetryEvent {
                        url: url.to_owned(),
                        status: status.as_u16(),
                        attempt,
                        max_retries: class.budget(&self.options),
                        delay,
                    });
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        "{} from {}, retrying after {} ms",
                        status.as_u16(),
                        url,
                        delay.as_millis()
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Disposition::Transient { .. } | Disposition::Fatal => {
                    let body = response.text().await.map_err(SpaceTradersError::Transport)?;
                    // Failure bodies that don't match the documented
                    // envelope surface raw rather than masking the status
                    // behind a decode error.
                    let message = serde_json::from_str::<FailureEnvelope>(&body)
                        .map(|envelope| envelope.error.message)
                        .unwrap_or(body);
                    return Err(SpaceTradersError::Api {
                        status: status.as_u16(),
                        message,
                    });
                }
            }
        }
    }

    /// One HTTP exchange: builds headers and body, sends, and hands back
    /// the raw response without interpreting it.
    async fn dispatch_once<P>(
        &self,
        method: &Method,
        url: &str,
        payload: Option<&P>,
        auth: Auth,
    ) -> reqwest::Result<reqwest::Response>
    where
        P: Serialize + ?Sized,
    {
        let mut request = self
            .http
            .request(method.clone(), url)
            .timeout(Duration::from_millis(self.options.timeout_ms));
        if auth == Auth::Bearer {
            request = request.header(header::AUTHORIZATION, &self.authorization);
        }
        // Payloads ride only on mutating methods. `json` also sets the
        // `Content-Type: application/json` header.
        if let Some(payload) = payload {
            if matches!(*method, Method::POST | Method::PUT) {
                request = request.json(payload);
            }
        }
        request.send().await
    }
}

fn bearer_authorization(token: &str) -> String {
    let trimmed = token.trim();
    let prefix = trimmed.get(..7);
    if prefix.is_some_and(|value| value.eq_ignore_ascii_case("bearer ")) {
        trimmed.to_owned()
    } else {
        format!("Bearer {trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::{bearer_authorization, SpaceTradersClient};

    #[test]
    fn bearer_adds_prefix_when_missing() {
        assert_eq!(bearer_authorization("abc123"), "Bearer abc123".to_owned());
    }

    #[test]
    fn bearer_keeps_existing_prefix() {
        assert_eq!(
            bearer_authorization("bEaReR abc123"),
            "bEaReR abc123".to_owned()
        );
    }

    #[test]
    fn debug_redacts_authorization_value() {
        let client = SpaceTradersClient::new("kit", "secret-token");
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn base_url_override_trims_trailing_slash() {
        let client = SpaceTradersClient::new("kit", "t").with_base_url("http://127.0.0.1:9999/");
        assert_eq!(client.url("/game/status"), "http://127.0.0.1:9999/game/status");
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use url::Url;
use webflow_core::{ApiRequest, ApiTransport};
use webflow_domain::constants::{
    API_VERSION, API_VERSION_HEADER, DEFAULT_API_BASE_URL, MAX_BACKOFF_SHIFT, USER_AGENT_PREFIX,
};
use webflow_domain::utils::redact_credential;
use webflow_domain::{validate_token, ApiToken, HttpConfig, HttpMethod, ProviderConfig, ProviderError, Result};

use super::classify::classify_status;
use crate::errors::InfraError;

/// Authenticated HTTP client for the remote API with rate-limit aware
/// retries, exponential backoff, and cancellation.
///
/// Retries only HTTP 429 and transport failures (timeouts, connection
/// errors). Every other status is classified and returned immediately.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    credential: ApiToken,
    max_retries: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder(token: ApiToken) -> HttpClientBuilder {
        HttpClientBuilder::new(token)
    }

    /// Client for a validated provider configuration.
    ///
    /// # Errors
    /// Returns `ProviderError::Config` under the same conditions as
    /// [`HttpClientBuilder::build`].
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        Self::builder(config.api_token.clone())
            .base_url(config.base_url.clone())
            .http_config(&config.http)
            .build()
    }

    /// Base URL every request path is joined onto, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, cancel: &CancellationToken) -> Result<T> {
        self.request(HttpMethod::Get, path, None, cancel).await
    }

    /// Execute a request with retry semantics and decode the JSON body.
    ///
    /// Empty bodies and 204/205 responses decode from `null`.
    #[instrument(skip(self, body, cancel), fields(method = %method, path = %path))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let attempts = self.max_retries + 1;
        let mut attempt: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                return Err(cancelled(attempt));
            }

            let mut builder = self.client.request(to_method(method), &url);
            if let Some(body) = body {
                builder = builder.json(body);
            }

            debug!(attempt = attempt + 1, "sending HTTP request");
            let outcome = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(cancelled(attempt)),
                outcome = builder.send() => outcome,
            };

            let failure = match outcome {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt = attempt + 1, %status, "received HTTP response");

                    let retry_after = self.retry_after(response.headers());
                    let text = tokio::select! {
                        biased;
                        () = cancel.cancelled() => return Err(cancelled(attempt)),
                        text = response.text() => text,
                    };

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let delay = retry_after.unwrap_or_else(|| self.backoff_delay(attempt));
                        let text = text.unwrap_or_default();
                        (classify_status(status, &text, self.credential.expose()), delay)
                    } else {
                        match text {
                            Ok(text) if status.is_success() => return parse_body(status, &text),
                            Ok(text) => return Err(classify_status(status, &text, self.credential.expose())),
                            Err(err) => (self.transport_error(err), self.backoff_delay(attempt)),
                        }
                    }
                }
                Err(err) => {
                    let error = self.transport_error(err);
                    if !error.kind().is_retryable() {
                        return Err(error);
                    }
                    (error, self.backoff_delay(attempt))
                }
            };

            let (error, delay) = failure;
            if attempt + 1 >= attempts {
                warn!(attempts, error = %error, "giving up after retries");
                return Err(exhausted(error, attempts));
            }

            warn!(
                attempt = attempt + 1,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                error = %error,
                "retrying HTTP request"
            );
            pause(delay, cancel).await.map_err(|()| cancelled(attempt + 1))?;
            attempt += 1;
        }
    }

    /// `base_delay * 2^retry`, capped at `max_delay`.
    fn backoff_delay(&self, retry: u32) -> Duration {
        let multiplier = 1u32 << retry.min(MAX_BACKOFF_SHIFT);
        self.base_delay.saturating_mul(multiplier).min(self.max_delay)
    }

    /// Positive `Retry-After` seconds, capped at `max_delay`.
    fn retry_after(&self, headers: &HeaderMap) -> Option<Duration> {
        let seconds: u64 = headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()?;
        (seconds > 0).then(|| Duration::from_secs(seconds).min(self.max_delay))
    }

    fn transport_error(&self, err: reqwest::Error) -> ProviderError {
        let error: ProviderError = InfraError::from(err).into();
        let credential = self.credential.expose();
        match error {
            ProviderError::Transient(msg) => ProviderError::Transient(redact_credential(&msg, credential)),
            ProviderError::Config(msg) => ProviderError::Config(redact_credential(&msg, credential)),
            ProviderError::Decode(msg) => ProviderError::Decode(redact_credential(&msg, credential)),
            ProviderError::Fatal(msg) => ProviderError::Fatal(redact_credential(&msg, credential)),
            other => other,
        }
    }
}

#[async_trait]
impl ApiTransport for HttpClient {
    async fn execute(&self, request: ApiRequest, cancel: &CancellationToken) -> Result<Value> {
        self.request(request.method, &request.path, request.body.as_ref(), cancel).await
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn parse_body<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<T> {
    if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT || text.trim().is_empty() {
        return serde_json::from_value(Value::Null).map_err(|err| {
            ProviderError::Decode(format!(
                "empty response ({}) cannot be decoded into the expected type: {err}",
                status.as_u16()
            ))
        });
    }
    serde_json::from_str(text).map_err(|err| InfraError::from(err).into())
}

/// Sleep for `delay` unless cancelled first.
async fn pause(delay: Duration, cancel: &CancellationToken) -> std::result::Result<(), ()> {
    if delay.is_zero() {
        return Ok(());
    }
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(()),
        () = tokio::time::sleep(delay) => Ok(()),
    }
}

fn cancelled(attempts: u32) -> ProviderError {
    ProviderError::Cancelled(format!("request cancelled after {attempts} completed attempt(s)"))
}

fn exhausted(last: ProviderError, attempts: u32) -> ProviderError {
    let message = format!("max retries exceeded after {attempts} attempts: {}", last.message());
    match last {
        ProviderError::RateLimited(_) => ProviderError::RateLimited(message),
        _ => ProviderError::Transient(message),
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    token: ApiToken,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    base_delay: Duration,
    max_delay: Duration,
    user_agent: String,
    allow_plain_http: bool,
}

impl HttpClientBuilder {
    fn new(token: ApiToken) -> Self {
        let defaults = HttpConfig::default();
        Self {
            token,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: defaults.timeout(),
            max_retries: defaults.max_retries,
            base_delay: defaults.base_delay(),
            max_delay: defaults.max_delay(),
            user_agent: format!("{USER_AGENT_PREFIX}/{}", env!("CARGO_PKG_VERSION")),
            allow_plain_http: false,
        }
    }

    /// API root, e.g. `https://api.webflow.com`. Must be https unless plain
    /// HTTP is explicitly allowed.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Apply timeout and retry settings from configuration.
    pub fn http_config(self, http: &HttpConfig) -> Self {
        self.timeout(http.timeout())
            .max_retries(http.max_retries)
            .base_delay(http.base_delay())
            .max_delay(http.max_delay())
    }

    /// Per-request timeout, covering connect, send and body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries after the first attempt; at most `max_retries + 1` requests.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// First backoff delay; doubles on every retry.
    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Upper bound for backoff and `Retry-After` delays. Never below the
    /// base delay.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Override the default `webflow-provider/<version>` user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Test-only helper to talk to a local plain-HTTP mock server.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn allow_plain_http(mut self, enabled: bool) -> Self {
        self.allow_plain_http = enabled;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `ProviderError::Config` if the token is missing or malformed,
    /// the base URL is invalid or not https, or the TLS stack fails to
    /// initialise.
    pub fn build(self) -> Result<HttpClient> {
        validate_token(Some(&self.token))?;

        let parsed = Url::parse(&self.base_url)
            .map_err(|err| ProviderError::Config(format!("invalid API base URL '{}': {err}", self.base_url)))?;
        match parsed.scheme() {
            "https" => {}
            "http" if self.allow_plain_http => {}
            scheme => {
                return Err(ProviderError::Config(format!(
                    "API base URL must use https, got '{scheme}://'"
                )));
            }
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token.expose())).map_err(|_| {
            ProviderError::Config("API token contains characters that are not valid in an HTTP header".into())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = ReqwestClient::builder()
            .use_rustls_tls()
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .https_only(!self.allow_plain_http)
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .default_headers(headers);

        if self.allow_plain_http {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            ProviderError::from(infra)
        })?;

        Ok(HttpClient {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            credential: self.token,
            max_retries: self.max_retries,
            base_delay: self.base_delay,
            max_delay: self.max_delay.max(self.base_delay),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    use serde_json::json;
    use webflow_domain::ErrorKind;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const TOKEN: &str = "test-token-0123456789abcdef";

    fn client_for(server: &MockServer) -> HttpClient {
        HttpClient::builder(ApiToken::new(TOKEN))
            .base_url(server.uri())
            .allow_plain_http(true)
            .base_delay(Duration::from_millis(20))
            .max_delay(Duration::from_millis(200))
            .max_retries(3)
            .build()
            .expect("http client")
    }

    async fn request_count(server: &MockServer) -> usize {
        server.received_requests().await.unwrap().len()
    }

    #[tokio::test]
    async fn sends_auth_and_version_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/sites/abc"))
            .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
            .and(header("Accept-Version", "2.0.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value: Value = client.get("/v2/sites/abc", &CancellationToken::new()).await.unwrap();

        assert_eq!(value["id"], "abc");
        let requests = server.received_requests().await.unwrap();
        let agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
        assert!(agent.starts_with("webflow-provider/"));
    }

    #[tokio::test]
    async fn sends_json_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/sites/abc/redirects"))
            .and(body_json(json!({"fromUrl": "/a"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "r1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ApiRequest::new(HttpMethod::Post, "/v2/sites/abc/redirects")
            .with_body(json!({"fromUrl": "/a"}));
        let value = client.execute(request, &CancellationToken::new()).await.unwrap();

        assert_eq!(value["id"], "r1");
    }

    #[tokio::test]
    async fn retries_rate_limits_with_exponential_backoff() {
        let server = MockServer::start().await;
        let attempts = Arc::new(AtomicUsize::new(0));
        let attempts_clone = attempts.clone();
        Mock::given(method("GET"))
            .respond_with(move |_req: &wiremock::Request| -> ResponseTemplate {
                let current = attempts_clone.fetch_add(1, Ordering::SeqCst);
                if current < 2 {
                    ResponseTemplate::new(429)
                } else {
                    ResponseTemplate::new(200).set_body_json(json!({"ok": true}))
                }
            })
            .expect(3)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let started = Instant::now();
        let value: Value = client.get("/v2/sites", &CancellationToken::new()).await.unwrap();

        assert_eq!(value["ok"], true);
        assert_eq!(request_count(&server).await, 3);
        // 20ms after the first 429, 40ms after the second.
        assert!(started.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn retry_after_is_capped_at_max_delay() {
        let server = MockServer::start().await;
        let attempts = Arc::new(AtomicUsize::new(0));
        let attempts_clone = attempts.clone();
        Mock::given(method("GET"))
            .respond_with(move |_req: &wiremock::Request| -> ResponseTemplate {
                if attempts_clone.fetch_add(1, Ordering::SeqCst) == 0 {
                    ResponseTemplate::new(429).insert_header("Retry-After", "30")
                } else {
                    ResponseTemplate::new(200).set_body_json(json!({}))
                }
            })
            .mount(&server)
            .await;

        let client = client_for(&server);
        let started = Instant::now();
        let _: Value = client.get("/v2/sites", &CancellationToken::new()).await.unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(200), "waited {elapsed:?}");
        assert!(elapsed < Duration::from_secs(5), "waited {elapsed:?}");
    }

    #[test]
    fn retry_after_must_be_positive() {
        let client = HttpClient::builder(ApiToken::new(TOKEN)).build().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("0"));
        assert_eq!(client.retry_after(&headers), None);
        headers.insert(RETRY_AFTER, HeaderValue::from_static("-5"));
        assert_eq!(client.retry_after(&headers), None);
        headers.insert(RETRY_AFTER, HeaderValue::from_static("2"));
        assert_eq!(client.retry_after(&headers), Some(Duration::from_secs(2)));
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let client = HttpClient::builder(ApiToken::new(TOKEN))
            .base_delay(Duration::from_secs(1))
            .max_delay(Duration::from_secs(30))
            .build()
            .unwrap();
        assert_eq!(client.backoff_delay(0), Duration::from_secs(1));
        assert_eq!(client.backoff_delay(1), Duration::from_secs(2));
        assert_eq!(client.backoff_delay(2), Duration::from_secs(4));
        assert_eq!(client.backoff_delay(10), Duration::from_secs(30));
        assert_eq!(client.backoff_delay(u32::MAX), Duration::from_secs(30));
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let client = HttpClient::builder(ApiToken::new(TOKEN))
            .base_url(server.uri())
            .allow_plain_http(true)
            .base_delay(Duration::from_millis(5))
            .max_retries(2)
            .build()
            .unwrap();
        let err = client.get::<Value>("/v2/sites", &CancellationToken::new()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert!(err.message().starts_with("max retries exceeded"));
        assert_eq!(request_count(&server).await, 3);
    }

    #[tokio::test]
    async fn conflict_is_returned_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({"message": "duplicate slug"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .request::<Value>(HttpMethod::Post, "/v2/sites/abc/collections", Some(&json!({})), &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err, ProviderError::Conflict("duplicate slug".into()));
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn server_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string(format!("oops {TOKEN}")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get::<Value>("/v2/sites", &CancellationToken::new()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Fatal);
        assert!(err.message().starts_with("HTTP 500"));
        assert!(!err.message().contains(TOKEN));
    }

    #[tokio::test]
    async fn unauthorized_does_not_leak_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(format!("bad token {TOKEN}")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get::<Value>("/v2/sites", &CancellationToken::new()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(!err.to_string().contains(TOKEN));
        assert!(!format!("{err:?}").contains(TOKEN));
    }

    #[tokio::test]
    async fn not_found_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get::<Value>("/v2/sites/x", &CancellationToken::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn empty_responses_decode_as_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(205))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let cancel = CancellationToken::new();
        let deleted: Value =
            client.request(HttpMethod::Delete, "/v2/webhooks/w1", None, &cancel).await.unwrap();
        assert_eq!(deleted, Value::Null);
        let reset: Option<Value> = client.get("/v2/sites", &cancel).await.unwrap();
        assert_eq!(reset, None);
    }

    #[tokio::test]
    async fn invalid_json_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get::<Value>("/v2/sites", &CancellationToken::new()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn cancellation_interrupts_backoff() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = HttpClient::builder(ApiToken::new(TOKEN))
            .base_url(server.uri())
            .allow_plain_http(true)
            .base_delay(Duration::from_secs(10))
            .max_delay(Duration::from_secs(10))
            .build()
            .unwrap();

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let started = Instant::now();
        let err = client.get::<Value>("/v2/sites", &cancel).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn cancelled_token_sends_nothing() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = client.get::<Value>("/v2/sites", &cancel).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn cancellation_interrupts_stalled_rate_limit_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 429 Too Many Requests\r\nContent-Length: 100\r\n\r\npartial")
                .await
                .unwrap();
            // Hold the connection open without finishing the body
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let client = HttpClient::builder(ApiToken::new(TOKEN))
            .base_url(format!("http://{addr}"))
            .allow_plain_http(true)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            trigger.cancel();
        });

        let started = Instant::now();
        let err = client.get::<Value>("/v2/sites", &cancel).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn retries_on_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED

        let client = HttpClient::builder(ApiToken::new(TOKEN))
            .base_url(format!("http://{addr}"))
            .allow_plain_http(true)
            .base_delay(Duration::from_millis(5))
            .max_retries(1)
            .build()
            .unwrap();

        let err = client.get::<Value>("/v2/sites", &CancellationToken::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transient);
        assert!(err.message().starts_with("max retries exceeded after 2 attempts"));
    }

    #[test]
    fn rejects_plain_http_base_url() {
        let err = HttpClient::builder(ApiToken::new(TOKEN))
            .base_url("http://api.example.com")
            .build()
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.message().contains("https"));
    }

    #[test]
    fn rejects_missing_credentials() {
        let err = HttpClient::builder(ApiToken::default()).build().err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}

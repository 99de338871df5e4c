//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::config::{ClientConfig, ConfigError};
use crate::domain::{ApiSecret, ValidationError};

mod numbers;
mod sms;

#[cfg(test)]
mod fake;

pub use numbers::Numbers;
pub use sms::Sms;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<HttpResponse, BoxError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(self.execute(self.client.get(url)))
    }

    fn post<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(self.execute(self.client.post(url)))
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.execute(self.client.post(url).form(&params)).await })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NexmoClient`] resources.
///
/// Local validation failures are reported before any request is made. Provider
/// failures on `sms/json` are not errors: inspect each report's
/// [`ResponseCode`](crate::ResponseCode) instead.
pub enum NexmoError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by `sms/json`.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// A required field was missing or malformed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Number management answered `401`.
    #[error("wrong credentials")]
    WrongCredentials,

    /// Number management answered `420`.
    #[error("bad parameters")]
    BadParameters,

    /// Number management answered with any other non-200 status.
    #[error("other error: HTTP {status}")]
    OtherStatus { status: u16 },
}

#[derive(Debug, Clone)]
/// Builder for [`NexmoClient`].
///
/// Use this when you need to customize the HTTP timeout or user-agent.
pub struct NexmoClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NexmoClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NexmoClient`].
    pub fn build(self) -> Result<NexmoClient, NexmoError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        Ok(NexmoClient {
            config: Arc::new(self.config),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

/// High-level Nexmo client.
///
/// Holds the immutable [`ClientConfig`] and an HTTP client; cheap to clone and safe
/// to share between tasks. Resources are borrowed from it:
///
/// - [`NexmoClient::sms`] for `sms/json`
/// - [`NexmoClient::numbers`] for `number/search`, `number/buy` and `number/cancel`
///
/// No call is retried and no pacing is applied; the provider rate-limits callers
/// that send too quickly.
#[derive(Clone)]
pub struct NexmoClient {
    config: Arc<ClientConfig>,
    http: Arc<dyn HttpTransport>,
}

impl NexmoClient {
    /// Create a client with a default HTTP client.
    ///
    /// For more customization, use [`NexmoClient::builder`].
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client from `NEXMO_*` environment variables.
    pub fn from_env() -> Result<Self, NexmoError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// Start building a client with custom settings.
    pub fn builder(config: ClientConfig) -> NexmoClientBuilder {
        NexmoClientBuilder::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Messaging resource.
    pub fn sms(&self) -> Sms<'_> {
        Sms::new(&self.config, self.http.as_ref())
    }

    /// Number management resource.
    pub fn numbers(&self) -> Numbers<'_> {
        Numbers::new(&self.config, self.http.as_ref())
    }
}

/// Mask the path segment carrying the secret before a URL reaches the log.
///
/// Path segments are percent-encoded, so the secret is matched in its encoded
/// form as well as verbatim.
fn redact_url(url: &Url, secret: &ApiSecret) -> String {
    let mut scratch = url.clone();
    match scratch.path_segments_mut() {
        Ok(mut segments) => {
            segments.clear().push(secret.as_str());
        }
        Err(()) => return url.as_str().replace(secret.as_str(), "***"),
    }
    let encoded = scratch.path().trim_start_matches('/').to_owned();

    let mut masked = url.clone();
    if let Some(segments) = url.path_segments() {
        let path: Vec<&str> = segments
            .map(|segment| {
                if segment == encoded || segment == secret.as_str() {
                    "***"
                } else {
                    segment
                }
            })
            .collect();
        masked.set_path(&format!("/{}", path.join("/")));
    }
    masked.to_string()
}

fn non_empty_body(body: String) -> Option<String> {
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}

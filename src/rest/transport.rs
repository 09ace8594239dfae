//! HTTP transport used by the REST client.
//!
//! The client only needs "send this verb to this URL and give me the status
//! and body". [`HttpTransport`] is that seam; [`ReqwestTransport`] is the
//! default implementation.

use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::error::KunaError;
use crate::types::Verb;

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A transport able to issue a single HTTP request.
///
/// POST requests carry all parameters in the URL and have an empty body.
/// Implementations must not retry; timeouts are theirs to enforce.
pub trait HttpTransport: Send + Sync {
    /// Send `verb` to `url` and return the response, whatever its status.
    fn send<'a>(&'a self, verb: Verb, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, KunaError>>;
}

/// Transport backed by `reqwest` with request tracing.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Wrap an already configured client.
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self { client }
    }

    /// Build a traced client with the given user agent and optional timeout.
    pub fn with_settings(user_agent: &str, timeout: Option<Duration>) -> Self {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("kuna-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, verb: Verb, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, KunaError>> {
        async move {
            let request = match verb {
                Verb::Get => self.client.get(url),
                Verb::Post => self.client.post(url),
            };
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        }
        .boxed()
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

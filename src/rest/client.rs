//! Kuna REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::auth::{ClockNonce, CredentialsProvider, NonceProvider, SignedEndpoint, SignedQuery};
use crate::error::KunaError;
use crate::rest::endpoints::KUNA_BASE_URL;
use crate::rest::transport::{HttpTransport, ReqwestTransport};
use crate::types::Verb;

/// The Kuna REST API client.
///
/// Every operation issues exactly one HTTP request through the configured
/// transport. Signed operations fail with [`KunaError::MissingCredentials`]
/// before anything is sent when the client has no credentials.
///
/// # Example
///
/// ```rust,no_run
/// use kuna_api_client::rest::KunaRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = KunaRestClient::new();
///
///     let ticker = client.get_ticker("btcuah").await?;
///     println!("{}: last {}", ticker.market, ticker.last());
///
///     Ok(())
/// }
/// ```
///
/// For signed endpoints, provide credentials:
///
/// ```rust,no_run
/// use kuna_api_client::rest::KunaRestClient;
/// use kuna_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("access_key", "secret_key"));
///     let client = KunaRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let me = client.get_user_info().await?;
///     println!("Accounts: {:?}", me.accounts);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KunaRestClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl KunaRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`KunaRestClient::builder()`] to configure credentials for signed endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> KunaRestClientBuilder {
        KunaRestClientBuilder::new()
    }

    /// The base URL every path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a public GET request and parse the body as JSON.
    pub(crate) async fn public_get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, KunaError> {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| KunaError::MalformedInput(e.to_string()))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        };

        tracing::debug!(verb = %Verb::Get, path = endpoint, "public request");
        let body = self.execute(Verb::Get, &url).await?;
        parse_json(&body)
    }

    /// Make a signed request and parse the body as JSON.
    ///
    /// `values` holds every contract parameter except `access_key` and `tonce`.
    pub(crate) async fn signed_request(
        &self,
        endpoint: &SignedEndpoint,
        values: &[(&str, String)],
    ) -> Result<Value, KunaError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(KunaError::MissingCredentials)?
            .get_credentials();

        let path_prefix = Url::parse(&self.base_url)?.path().to_string();
        let tonce = self.nonce_provider.next_nonce();
        let signed = SignedQuery::build(endpoint, &path_prefix, credentials, tonce, values)?;

        let url = format!("{}{}?{}", self.base_url, endpoint.path, signed.query());

        tracing::debug!(verb = %endpoint.verb, path = endpoint.path, tonce, "signed request");
        let body = self.execute(endpoint.verb, &url).await?;
        parse_json(&body)
    }

    /// Send the request and turn non-2xx statuses into errors.
    async fn execute(&self, verb: Verb, url: &str) -> Result<String, KunaError> {
        let response = self.transport.send(verb, url).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, %verb, "request rejected");
            return Err(KunaError::from_status(response.status, response.body));
        }

        Ok(response.body)
    }
}

impl Default for KunaRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KunaRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KunaRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`KunaRestClient`].
pub struct KunaRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    transport: Option<Arc<dyn HttpTransport>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl KunaRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: KUNA_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            transport: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL, including the API path (default `https://kuna.io/api/v2`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom tonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom HTTP transport. `user_agent` and `timeout` are ignored then.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a per-request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> KunaRestClient {
        let transport = self.transport.unwrap_or_else(|| {
            let user_agent = self
                .user_agent
                .unwrap_or_else(|| format!("kuna-api-client/{}", env!("CARGO_PKG_VERSION")));
            Arc::new(ReqwestTransport::with_settings(&user_agent, self.timeout))
        });

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(ClockNonce::new()));

        KunaRestClient {
            transport,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for KunaRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_json(body: &str) -> Result<Value, KunaError> {
    serde_json::from_str(body).map_err(|e| {
        KunaError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
    })
}

/// Take the elements of a top-level JSON array.
pub(crate) fn expect_array(value: Value, what: &str) -> Result<Vec<Value>, KunaError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(KunaError::InvalidResponse(format!(
            "expected an array of {what}, got {other}"
        ))),
    }
}

/// Reject market symbols that cannot be placed in a path or query verbatim.
pub(crate) fn check_market(market: &str) -> Result<(), KunaError> {
    if market.is_empty() || !market.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(KunaError::MalformedInput(format!(
            "invalid market symbol {market:?}"
        )));
    }
    Ok(())
}

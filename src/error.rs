//! Error types for the Kuna client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Kuna client operations.
#[derive(Error, Debug)]
pub enum KunaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
        /// Kuna error payload, when the body carried one
        api: Option<ApiError>,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A request could not be assembled from the given input
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: access key and secret key required for signed endpoints")]
    MissingCredentials,
}

impl KunaError {
    /// Whether the failure happened on the wire (network error or non-2xx status).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            KunaError::Http(_) | KunaError::HttpMiddleware(_) | KunaError::Status { .. }
        )
    }

    /// Whether the client was not configured for the attempted call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, KunaError::MissingCredentials)
    }

    /// The Kuna error payload attached to a non-2xx response, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            KunaError::Status { api, .. } => api.as_ref(),
            _ => None,
        }
    }

    /// Build a status error, extracting the Kuna error payload from the body.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        let api = ApiError::from_body(&body);
        KunaError::Status { status, body, api }
    }
}

/// Error payload returned by the Kuna API.
///
/// Kuna reports failures as `{"error": {"code": 2002, "message": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable error message.
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Parse the error envelope out of a response body.
    pub fn from_body(body: &str) -> Option<Self> {
        #[derive(Deserialize)]
        struct Envelope {
            error: ApiError,
        }
        serde_json::from_str::<Envelope>(body).ok().map(|e| e.error)
    }

    /// Check if the server rejected the request signature.
    pub fn is_invalid_signature(&self) -> bool {
        self.message_contains("signature")
    }

    /// Check if the server rejected the tonce (stale or already used).
    pub fn is_invalid_nonce(&self) -> bool {
        self.message_contains("tonce")
    }

    /// Check if the access key is unknown or disabled.
    pub fn is_invalid_access_key(&self) -> bool {
        self.message_contains("access key")
    }

    fn message_contains(&self, needle: &str) -> bool {
        self.message.to_lowercase().contains(needle)
    }
}

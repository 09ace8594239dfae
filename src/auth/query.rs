//! Assembly of signed query strings.
//!
//! Kuna verifies the signature against the query exactly as received, so the
//! parameter order used for signing must match the order transmitted. Each
//! signed endpoint declares that order once, as a [`SignedEndpoint`] contract,
//! and [`SignedQuery::build`] is the only place that turns it into a string.

use crate::auth::{Credentials, sign};
use crate::error::KunaError;
use crate::types::Verb;

/// Name of the access key parameter.
pub const ACCESS_KEY: &str = "access_key";
/// Name of the tonce parameter.
pub const TONCE: &str = "tonce";
/// Name of the signature parameter, always transmitted last.
pub const SIGNATURE: &str = "signature";

/// The signing contract of one authenticated endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedEndpoint {
    /// HTTP verb the endpoint is called with.
    pub verb: Verb,
    /// Path relative to the API base URL (e.g. `/orders`).
    pub path: &'static str,
    /// Every parameter the server signs, in transmission order.
    pub params: &'static [&'static str],
}

impl SignedEndpoint {
    /// Whether the contract lists its parameters in ascending key order.
    pub fn is_alphabetical(&self) -> bool {
        self.params.windows(2).all(|pair| pair[0] < pair[1])
    }
}

/// A fully assembled, signed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery {
    /// Signed path, including the base URL path prefix.
    pub path: String,
    /// Query string without the signature parameter.
    pub unsigned_query: String,
    /// Hex signature over `VERB|path|unsigned_query`.
    pub signature: String,
}

impl SignedQuery {
    /// Assemble and sign the query for `endpoint`.
    ///
    /// `access_key` and `tonce` are filled in here; every other parameter of
    /// the contract must be present in `values`, and `values` may not carry
    /// anything the contract does not name.
    pub fn build(
        endpoint: &SignedEndpoint,
        path_prefix: &str,
        credentials: &Credentials,
        tonce: u64,
        values: &[(&str, String)],
    ) -> Result<Self, KunaError> {
        if !credentials.is_complete() {
            return Err(KunaError::MissingCredentials);
        }

        if let Some((name, _)) = values
            .iter()
            .find(|(name, _)| !endpoint.params.contains(name) || [ACCESS_KEY, TONCE].contains(name))
        {
            return Err(KunaError::MalformedInput(format!(
                "parameter {name:?} is not accepted by {} {}",
                endpoint.verb, endpoint.path
            )));
        }

        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(endpoint.params.len());
        for &name in endpoint.params {
            let value = match name {
                ACCESS_KEY => credentials.access_key.clone(),
                TONCE => tonce.to_string(),
                _ => values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.clone())
                    .ok_or_else(|| {
                        KunaError::MalformedInput(format!(
                            "missing parameter {name:?} for {} {}",
                            endpoint.verb, endpoint.path
                        ))
                    })?,
            };
            pairs.push((name, value));
        }

        let unsigned_query = serde_urlencoded::to_string(&pairs)
            .map_err(|e| KunaError::MalformedInput(e.to_string()))?;
        let path = format!("{}{}", path_prefix.trim_end_matches('/'), endpoint.path);
        let signature = sign(
            endpoint.verb,
            &format!("{path}?{unsigned_query}"),
            credentials.expose_secret(),
        )?;

        Ok(Self {
            path,
            unsigned_query,
            signature,
        })
    }

    /// The query as transmitted: unsigned parameters, then `signature`.
    pub fn query(&self) -> String {
        format!("{}&{SIGNATURE}={}", self.unsigned_query, self.signature)
    }
}

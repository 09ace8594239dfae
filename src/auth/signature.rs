//! HMAC-SHA256 signature generation for Kuna API authentication.
//!
//! Kuna signed endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256("{VERB}|{path}|{query}", secret_key))
//! ```
//!
//! The query is taken exactly as it will be transmitted, without the
//! `signature` parameter, which is appended afterwards.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

use crate::error::KunaError;
use crate::types::Verb;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical request string that gets signed.
///
/// `path_with_query` may be a path (`/api/v2/orders?market=btcuah`) or an
/// absolute URL; for URLs only the path component is used. Without a query the
/// result is `"{VERB}|{path}"`.
pub fn canonical_request(verb: Verb, path_with_query: &str) -> Result<String, KunaError> {
    let (path, query) = split_path_and_query(path_with_query)?;

    Ok(match query {
        Some(query) if !query.is_empty() => format!("{verb}|{path}|{query}"),
        _ => format!("{verb}|{path}"),
    })
}

/// Sign a request for Kuna's private API.
///
/// # Arguments
///
/// * `verb` - HTTP verb the request will be sent with
/// * `path_with_query` - Path (or URL) including every parameter in final order,
///   without `signature`
/// * `secret_key` - The secret half of the API key pair
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use kuna_api_client::auth::sign;
/// use kuna_api_client::types::Verb;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign(
///     Verb::Get,
///     "/api/v2/members/me?access_key=xxx&tonce=1465850766246",
///     "yyy",
/// )?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign(verb: Verb, path_with_query: &str, secret_key: &str) -> Result<String, KunaError> {
    if secret_key.is_empty() {
        return Err(KunaError::MissingCredentials);
    }

    let canonical = canonical_request(verb, path_with_query)?;

    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| KunaError::MalformedInput(format!("Invalid HMAC key: {e}")))?;
    mac.update(canonical.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Split at the first `?`, dropping any fragment.
fn split_path_and_query(input: &str) -> Result<(String, Option<&str>), KunaError> {
    let input = input.split_once('#').map_or(input, |(head, _)| head);
    let (target, query) = match input.split_once('?') {
        Some((target, query)) => (target, Some(query)),
        None => (input, None),
    };

    if target.contains("://") {
        let url = Url::parse(target)?;
        return Ok((url.path().to_string(), query));
    }

    if !target.starts_with('/') || target.chars().any(char::is_whitespace) {
        return Err(KunaError::MalformedInput(format!(
            "expected a relative path or absolute URL, got {target:?}"
        )));
    }

    Ok((target.to_string(), query))
}

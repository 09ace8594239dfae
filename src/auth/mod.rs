//! Authentication module for Kuna API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Tonce generation for signed requests
//! - HMAC-SHA256 signature generation
//! - Per-endpoint signed query assembly

mod credentials;
mod nonce;
mod query;
mod signature;

pub use credentials::{
    ACCESS_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, SECRET_KEY_VAR,
    StaticCredentials,
};
pub use nonce::{ClockNonce, FixedNonce, NonceProvider};
pub use query::{ACCESS_KEY, SIGNATURE, SignedEndpoint, SignedQuery, TONCE};
pub use signature::{canonical_request, sign};

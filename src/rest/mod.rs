//! Kuna REST API client.
//!
//! Provides access to the public market data and signed account endpoints of
//! the Kuna API v2.
//!
//! # Trait-based API
//!
//! The [`KunaClient`] trait abstracts all REST API operations, enabling
//! mock implementations and decorators. The [`HttpTransport`] trait is the
//! seam below the client: swap it to route requests elsewhere.
//!
//! ```rust,ignore
//! use kuna_api_client::rest::{KunaClient, KunaRestClient};
//!
//! async fn use_client<C: KunaClient>(client: &C) -> Result<(), kuna_api_client::KunaError> {
//!     let time = client.get_timestamp().await?;
//!     println!("Server time: {}", time.unixtime);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
mod private;
mod public;
mod traits;
mod transport;

pub use client::{KunaRestClient, KunaRestClientBuilder};
pub use endpoints::*;
pub use traits::KunaClient;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

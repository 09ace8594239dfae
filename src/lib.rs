//! # Kuna Client
//!
//! An async Rust client library for the Kuna exchange REST API v2.
//!
//! ## Features
//!
//! - Public market data: server time, tickers, order books, trades
//! - Signed account operations: balances, order placement and cancellation,
//!   order and trade history
//! - HMAC-SHA256 request signing with per-endpoint parameter contracts
//! - Total mapping of loosely-typed responses into typed records
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kuna_api_client::rest::KunaRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KunaRestClient::new();
//!     let time = client.get_timestamp().await?;
//!     println!("Server time: {:?}", time);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod mapper;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::KunaError;
pub use types::{Order, OrderBook, ServerTime, Side, Ticker, Trade, UserInfo, Verb};

/// Result type alias using KunaError
pub type Result<T> = std::result::Result<T, KunaError>;

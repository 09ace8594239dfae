//! Trait definition for the Kuna REST API client.
//!
//! [`KunaClient`] abstracts every REST operation so that callers can be
//! written against a mock or a decorating wrapper instead of the concrete
//! [`KunaRestClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use kuna_api_client::rest::{KunaClient, KunaRestClient};
//!
//! async fn spread<C: KunaClient>(client: &C) -> Result<f64, kuna_api_client::KunaError> {
//!     let ticker = client.get_ticker("btcuah").await?;
//!     Ok(ticker.sell() - ticker.buy())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::KunaError;
use crate::rest::KunaRestClient;
use crate::types::{Order, OrderBook, ServerTime, Side, Ticker, Trade, UserInfo};

/// Trait defining all Kuna REST API operations.
pub trait KunaClient: Send + Sync {
    /// Get the server time.
    fn get_timestamp(&self) -> impl Future<Output = Result<ServerTime, KunaError>> + Send;

    /// Get the ticker of one market.
    fn get_ticker(&self, market: &str) -> impl Future<Output = Result<Ticker, KunaError>> + Send;

    /// Get the tickers of every market.
    fn get_tickers(&self) -> impl Future<Output = Result<Vec<Ticker>, KunaError>> + Send;

    /// Get the order book of a market.
    fn get_order_book(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<OrderBook, KunaError>> + Send;

    /// Get recent trades of a market.
    fn get_trades(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Vec<Trade>, KunaError>> + Send;

    /// Get account information and balances.
    fn get_user_info(&self) -> impl Future<Output = Result<UserInfo, KunaError>> + Send;

    /// Get the account's trade history for a market.
    fn get_user_trades(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Vec<Trade>, KunaError>> + Send;

    /// Get the account's active orders for a market.
    fn get_user_orders(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Vec<Order>, KunaError>> + Send;

    /// Place a limit order.
    fn new_order(
        &self,
        side: Side,
        volume: Decimal,
        market: &str,
        price: Decimal,
    ) -> impl Future<Output = Result<Order, KunaError>> + Send;

    /// Cancel an order by id.
    fn cancel_order(&self, id: i64) -> impl Future<Output = Result<Order, KunaError>> + Send;
}

impl KunaClient for KunaRestClient {
    async fn get_timestamp(&self) -> Result<ServerTime, KunaError> {
        KunaRestClient::get_timestamp(self).await
    }

    async fn get_ticker(&self, market: &str) -> Result<Ticker, KunaError> {
        KunaRestClient::get_ticker(self, market).await
    }

    async fn get_tickers(&self) -> Result<Vec<Ticker>, KunaError> {
        KunaRestClient::get_tickers(self).await
    }

    async fn get_order_book(&self, market: &str) -> Result<OrderBook, KunaError> {
        KunaRestClient::get_order_book(self, market).await
    }

    async fn get_trades(&self, market: &str) -> Result<Vec<Trade>, KunaError> {
        KunaRestClient::get_trades(self, market).await
    }

    async fn get_user_info(&self) -> Result<UserInfo, KunaError> {
        KunaRestClient::get_user_info(self).await
    }

    async fn get_user_trades(&self, market: &str) -> Result<Vec<Trade>, KunaError> {
        KunaRestClient::get_user_trades(self, market).await
    }

    async fn get_user_orders(&self, market: &str) -> Result<Vec<Order>, KunaError> {
        KunaRestClient::get_user_orders(self, market).await
    }

    async fn new_order(
        &self,
        side: Side,
        volume: Decimal,
        market: &str,
        price: Decimal,
    ) -> Result<Order, KunaError> {
        KunaRestClient::new_order(self, side, volume, market, price).await
    }

    async fn cancel_order(&self, id: i64) -> Result<Order, KunaError> {
        KunaRestClient::cancel_order(self, id).await
    }
}

//! Signed REST API endpoints (authentication required).
//!
//! These endpoints require credentials to be configured on the client.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::KunaError;
use crate::mapper;
use crate::rest::KunaRestClient;
use crate::rest::client::{check_market, expect_array};
use crate::rest::endpoints::private;
use crate::rest::public::map_trades;
use crate::types::{Order, Side, Trade, UserInfo};

impl KunaRestClient {
    /// Get account information and balances.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kuna_api_client::rest::KunaRestClient;
    /// use kuna_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("access", "secret"));
    ///     let client = KunaRestClient::builder().credentials(credentials).build();
    ///
    ///     let me = client.get_user_info().await?;
    ///     for account in me.accounts {
    ///         println!("{}: {} ({} locked)", account.currency, account.balance, account.locked);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_user_info(&self) -> Result<UserInfo, KunaError> {
        let value = self.signed_request(&private::USER_INFO, &[]).await?;
        serde_json::from_value(value)
            .map_err(|e| KunaError::InvalidResponse(format!("Failed to parse user info: {e}")))
    }

    /// Get the account's trade history for a market.
    pub async fn get_user_trades(&self, market: &str) -> Result<Vec<Trade>, KunaError> {
        check_market(market)?;
        let value = self
            .signed_request(&private::USER_TRADES, &[("market", market.to_string())])
            .await?;
        Ok(map_trades(expect_array(value, "trades")?))
    }

    /// Get the account's active orders for a market.
    pub async fn get_user_orders(&self, market: &str) -> Result<Vec<Order>, KunaError> {
        check_market(market)?;
        let value = self
            .signed_request(&private::USER_ORDERS, &[("market", market.to_string())])
            .await?;
        Ok(expect_array(value, "orders")?.iter().map(map_order).collect())
    }

    /// Place a limit order.
    ///
    /// # Arguments
    ///
    /// * `side` - Buy or sell.
    /// * `volume` - Amount in base currency; sent exactly as formatted.
    /// * `market` - Market symbol (e.g., "btcuah").
    /// * `price` - Limit price in quote currency; sent exactly as formatted.
    pub async fn new_order(
        &self,
        side: Side,
        volume: Decimal,
        market: &str,
        price: Decimal,
    ) -> Result<Order, KunaError> {
        check_market(market)?;
        let values = [
            ("side", side.to_string()),
            ("volume", volume.to_string()),
            ("market", market.to_string()),
            ("price", price.to_string()),
        ];
        let value = self.signed_request(&private::NEW_ORDER, &values).await?;
        Ok(map_order(&value))
    }

    /// Cancel an order by id. Returns the order as Kuna reports it.
    pub async fn cancel_order(&self, id: i64) -> Result<Order, KunaError> {
        let value = self
            .signed_request(&private::CANCEL_ORDER, &[("id", id.to_string())])
            .await?;
        Ok(map_order(&value))
    }
}

fn map_order(raw: &Value) -> Order {
    let (order, issues) = mapper::map_order_with_issues(raw);
    if !issues.is_empty() {
        tracing::debug!(id = order.id, ?issues, "order mapped with sentinels");
    }
    order
}

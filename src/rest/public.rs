//! Public REST API endpoints (no authentication required).

use serde_json::Value;

use crate::error::KunaError;
use crate::mapper;
use crate::rest::KunaRestClient;
use crate::rest::client::{check_market, expect_array};
use crate::rest::endpoints::public;
use crate::types::{OrderBook, ServerTime, Ticker, Trade};

impl KunaRestClient {
    /// Get the server time.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kuna_api_client::rest::KunaRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = KunaRestClient::new();
    ///     let time = client.get_timestamp().await?;
    ///     println!("Server time: {} ({})", time.unixtime, time.datetime()?);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_timestamp(&self) -> Result<ServerTime, KunaError> {
        let value = self.public_get(public::TIMESTAMP, &[]).await?;
        let unixtime = value.as_i64().ok_or_else(|| {
            KunaError::InvalidResponse(format!("expected an integer timestamp, got {value}"))
        })?;
        Ok(ServerTime { unixtime })
    }

    /// Get the ticker of one market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market symbol (e.g., "btcuah").
    pub async fn get_ticker(&self, market: &str) -> Result<Ticker, KunaError> {
        check_market(market)?;
        let value = self
            .public_get(&format!("{}/{}", public::TICKERS, market), &[])
            .await?;

        let raw = value.get("ticker").unwrap_or(&Value::Null);
        let (ticker, issues) = mapper::map_ticker_with_issues(market, raw);
        if !issues.is_empty() {
            tracing::debug!(market, ?issues, "ticker mapped with sentinels");
        }
        Ok(ticker)
    }

    /// Get the tickers of every market.
    ///
    /// The order of the returned tickers follows the response and is not
    /// stable across calls.
    pub async fn get_tickers(&self) -> Result<Vec<Ticker>, KunaError> {
        let value = self.public_get(public::TICKERS, &[]).await?;
        if !value.is_object() {
            return Err(KunaError::InvalidResponse(format!(
                "expected an object of markets, got {value}"
            )));
        }

        let (tickers, issues) = mapper::map_tickers_with_issues(&value);
        if !issues.is_empty() {
            tracing::debug!(?issues, "tickers mapped with sentinels");
        }
        Ok(tickers)
    }

    /// Get the order book of a market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market symbol (e.g., "btcuah").
    pub async fn get_order_book(&self, market: &str) -> Result<OrderBook, KunaError> {
        check_market(market)?;
        let value = self.public_get(public::DEPTH, &[("market", market)]).await?;
        serde_json::from_value(value)
            .map_err(|e| KunaError::InvalidResponse(format!("Failed to parse order book: {e}")))
    }

    /// Get recent trades of a market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market symbol (e.g., "btcuah").
    pub async fn get_trades(&self, market: &str) -> Result<Vec<Trade>, KunaError> {
        check_market(market)?;
        let value = self.public_get(public::TRADES, &[("market", market)]).await?;
        Ok(map_trades(expect_array(value, "trades")?))
    }
}

/// Map a list of raw trades, logging any fields that needed sentinels.
pub(crate) fn map_trades(items: Vec<Value>) -> Vec<Trade> {
    items
        .iter()
        .map(|raw| {
            let (trade, issues) = mapper::map_trade_with_issues(raw);
            if !issues.is_empty() {
                tracing::debug!(id = trade.id, ?issues, "trade mapped with sentinels");
            }
            trade
        })
        .collect()
}

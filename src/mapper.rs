//! Mapping of raw Kuna payloads into domain records.
//!
//! The `map_*` functions are total: whatever the input, they return a record,
//! with unusable fields replaced by sentinels (see [`crate::types::coerce`]).
//! The `try_map_*` variants run the same mapping but report every field that
//! needed a sentinel.

use serde_json::{Map, Value};

use crate::types::coerce::{FieldReader, MappingIssue};
use crate::types::{Order, Ticker, Trade};

/// Build a ticker from a market symbol and its raw ticker object.
///
/// Every field of `raw` is kept; a `market` key in `raw` is replaced by the
/// given symbol.
pub fn map_ticker(market: &str, raw: &Value) -> Ticker {
    map_ticker_with_issues(market, raw).0
}

/// Build one ticker per market from the `/tickers` payload.
///
/// The payload maps market symbols to `{"at": ..., "ticker": {...}}`; tickers
/// come out in the order the markets were delivered.
pub fn map_tickers(raw: &Value) -> Vec<Ticker> {
    map_tickers_with_issues(raw).0
}

/// Build a trade, coercing numeric fields.
pub fn map_trade(raw: &Value) -> Trade {
    map_trade_with_issues(raw).0
}

/// Build an order, coercing numeric fields.
pub fn map_order(raw: &Value) -> Order {
    map_order_with_issues(raw).0
}

/// Like [`map_tickers`], but fails with the list of problems found.
pub fn try_map_tickers(raw: &Value) -> Result<Vec<Ticker>, Vec<MappingIssue>> {
    into_result(map_tickers_with_issues(raw))
}

/// Like [`map_trade`], but fails with the list of problems found.
pub fn try_map_trade(raw: &Value) -> Result<Trade, Vec<MappingIssue>> {
    into_result(map_trade_with_issues(raw))
}

/// Like [`map_order`], but fails with the list of problems found.
pub fn try_map_order(raw: &Value) -> Result<Order, Vec<MappingIssue>> {
    into_result(map_order_with_issues(raw))
}

pub(crate) fn map_ticker_with_issues(market: &str, raw: &Value) -> (Ticker, Vec<MappingIssue>) {
    let mut issues = Vec::new();
    let fields = match raw.as_object() {
        Some(object) => object
            .iter()
            .filter(|(key, _)| key.as_str() != "market")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        None => {
            issues.push(MappingIssue {
                field: market.to_string(),
                expected: "ticker object",
                found: raw.to_string(),
            });
            Map::new()
        }
    };

    let ticker = Ticker {
        market: market.to_string(),
        fields,
    };
    (ticker, issues)
}

pub(crate) fn map_tickers_with_issues(raw: &Value) -> (Vec<Ticker>, Vec<MappingIssue>) {
    let Some(markets) = raw.as_object() else {
        let issue = MappingIssue {
            field: String::new(),
            expected: "object of markets",
            found: raw.to_string(),
        };
        return (Vec::new(), vec![issue]);
    };

    let mut issues = Vec::new();
    let tickers = markets
        .iter()
        .map(|(market, wrapper)| {
            let nested = wrapper.get("ticker").unwrap_or(&Value::Null);
            let (ticker, found) = map_ticker_with_issues(market, nested);
            issues.extend(found);
            ticker
        })
        .collect();

    (tickers, issues)
}

pub(crate) fn map_trade_with_issues(raw: &Value) -> (Trade, Vec<MappingIssue>) {
    let mut r = FieldReader::new(raw);
    let trade = Trade {
        id: r.int("id"),
        price: r.float("price"),
        volume: r.float("volume"),
        funds: r.float("funds"),
        market: r.text("market"),
        created_at: r.text("created_at"),
        side: r.text("side"),
    };
    (trade, r.into_issues())
}

pub(crate) fn map_order_with_issues(raw: &Value) -> (Order, Vec<MappingIssue>) {
    let mut r = FieldReader::new(raw);
    let order = Order {
        id: r.int("id"),
        side: r.text("side"),
        ord_type: r.text("ord_type"),
        price: r.float("price"),
        avg_price: r.float("avg_price"),
        state: r.text("state"),
        market: r.text("market"),
        created_at: r.text("created_at"),
        volume: r.float("volume"),
        remaining_volume: r.float("remaining_volume"),
        executed_volume: r.float("executed_volume"),
        trades_count: r.int("trades_count"),
    };
    (order, r.into_issues())
}

fn into_result<T>((value, issues): (T, Vec<MappingIssue>)) -> Result<T, Vec<MappingIssue>> {
    if issues.is_empty() {
        Ok(value)
    } else {
        Err(issues)
    }
}

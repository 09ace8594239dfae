//! Domain records returned by the client.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::types::coerce::to_f64;

/// Server time returned by `/timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTime {
    /// Unix timestamp in seconds.
    pub unixtime: i64,
}

impl ServerTime {
    /// Convert to a UTC date-time.
    pub fn datetime(&self) -> Result<OffsetDateTime, time::error::ComponentRange> {
        OffsetDateTime::from_unix_timestamp(self.unixtime)
    }
}

/// Ticker for a single market.
///
/// The upstream fields (`buy`, `sell`, `low`, `high`, `last`, `vol`, ...) are
/// kept verbatim in `fields`; the typed accessors coerce on read and return
/// `NaN` when a field is missing or not numeric. Serializes flat, with
/// `market` next to the upstream fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Market symbol, e.g. `btcuah`.
    pub market: String,
    /// Upstream fields in delivery order.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Ticker {
    /// Raw upstream field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Best bid.
    pub fn buy(&self) -> f64 {
        self.number("buy")
    }

    /// Best ask.
    pub fn sell(&self) -> f64 {
        self.number("sell")
    }

    /// 24h low.
    pub fn low(&self) -> f64 {
        self.number("low")
    }

    /// 24h high.
    pub fn high(&self) -> f64 {
        self.number("high")
    }

    /// Last trade price.
    pub fn last(&self) -> f64 {
        self.number("last")
    }

    /// 24h volume.
    pub fn vol(&self) -> f64 {
        self.number("vol")
    }

    fn number(&self, field: &str) -> f64 {
        self.fields.get(field).and_then(to_f64).unwrap_or(f64::NAN)
    }
}

/// Order book snapshot from `/depth`.
///
/// Entries are passed through as delivered; no per-level typing is done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Ask levels.
    #[serde(default)]
    pub asks: Vec<Value>,
    /// Bid levels.
    #[serde(default)]
    pub bids: Vec<Value>,
    /// Any other fields (e.g. `timestamp`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A public or private trade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    /// Trade id.
    pub id: i64,
    /// Execution price.
    pub price: f64,
    /// Executed volume in base currency.
    pub volume: f64,
    /// Executed volume in quote currency.
    pub funds: f64,
    /// Market symbol.
    pub market: String,
    /// Creation time as delivered.
    pub created_at: String,
    /// Trade side as delivered (may be empty for public trades).
    pub side: String,
}

/// An order owned by the account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// Order id.
    pub id: i64,
    /// `buy` or `sell`.
    pub side: String,
    /// Order type, e.g. `limit`.
    pub ord_type: String,
    /// Limit price.
    pub price: f64,
    /// Average execution price.
    pub avg_price: f64,
    /// Order state, e.g. `wait`, `done`, `cancel`.
    pub state: String,
    /// Market symbol.
    pub market: String,
    /// Creation time as delivered.
    pub created_at: String,
    /// Original volume.
    pub volume: f64,
    /// Volume still open.
    pub remaining_volume: f64,
    /// Volume already executed.
    pub executed_volume: f64,
    /// Number of trades the order took part in.
    pub trades_count: i64,
}

/// Account information from `/members/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Account e-mail.
    #[serde(default)]
    pub email: String,
    /// Whether the account is activated.
    #[serde(default)]
    pub activated: bool,
    /// Per-currency balances.
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl UserInfo {
    /// Balance entry for a currency, e.g. `uah`.
    pub fn account(&self, currency: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.currency == currency)
    }
}

/// Balance of a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Currency code.
    pub currency: String,
    /// Available balance.
    pub balance: Decimal,
    /// Balance locked in open orders.
    pub locked: Decimal,
}

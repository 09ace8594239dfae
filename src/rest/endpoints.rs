//! Kuna REST API endpoint constants.

/// Base URL for the Kuna REST API.
pub const KUNA_BASE_URL: &str = "https://kuna.io/api/v2";

/// Public endpoints (no authentication required).
pub mod public {
    /// Get server time.
    pub const TIMESTAMP: &str = "/timestamp";
    /// Get tickers; append `/{market}` for a single market.
    pub const TICKERS: &str = "/tickers";
    /// Get order book (`market` query parameter).
    pub const DEPTH: &str = "/depth";
    /// Get recent trades (`market` query parameter).
    pub const TRADES: &str = "/trades";
}

/// Signed endpoints and their parameter contracts.
///
/// Parameters are listed in the order Kuna expects them, which is ascending by
/// key. `access_key` and `tonce` are filled in by the client.
pub mod private {
    use crate::auth::SignedEndpoint;
    use crate::types::Verb;

    /// Get account information and balances.
    pub const USER_INFO: SignedEndpoint = SignedEndpoint {
        verb: Verb::Get,
        path: "/members/me",
        params: &["access_key", "tonce"],
    };

    /// Get the account's trade history for a market.
    pub const USER_TRADES: SignedEndpoint = SignedEndpoint {
        verb: Verb::Get,
        path: "/trades/my",
        params: &["access_key", "market", "tonce"],
    };

    /// Get the account's active orders for a market.
    pub const USER_ORDERS: SignedEndpoint = SignedEndpoint {
        verb: Verb::Get,
        path: "/orders",
        params: &["access_key", "market", "tonce"],
    };

    /// Place a limit order.
    pub const NEW_ORDER: SignedEndpoint = SignedEndpoint {
        verb: Verb::Post,
        path: "/orders",
        params: &["access_key", "market", "price", "side", "tonce", "volume"],
    };

    /// Cancel an order by id.
    pub const CANCEL_ORDER: SignedEndpoint = SignedEndpoint {
        verb: Verb::Post,
        path: "/order/delete",
        params: &["access_key", "id", "tonce"],
    };

    /// Every signed endpoint.
    pub const ALL: &[SignedEndpoint] = &[USER_INFO, USER_TRADES, USER_ORDERS, NEW_ORDER, CANCEL_ORDER];
}

#[cfg(test)]
mod tests {
    use super::private;
    use crate::auth::{ACCESS_KEY, TONCE};

    #[test]
    fn test_signed_contracts_are_alphabetical() {
        for endpoint in private::ALL {
            assert!(
                endpoint.is_alphabetical(),
                "{} {} is not in key order",
                endpoint.verb,
                endpoint.path
            );
        }
    }

    #[test]
    fn test_signed_contracts_carry_auth_params() {
        for endpoint in private::ALL {
            assert!(endpoint.params.contains(&ACCESS_KEY));
            assert!(endpoint.params.contains(&TONCE));
            assert!(!endpoint.params.contains(&"signature"));
        }
    }
}

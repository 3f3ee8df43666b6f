//! Static endpoint catalog
//!
//! Every REST call the SDK makes is described by one [`Endpoint`]. Paths are
//! relative to `{base}/{version}/` and may contain `{placeholder}` segments
//! that are filled positionally by [`Endpoint::resolve`].

use crate::enums::{Method, Scope};

/// Static description of one REST endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Logical name, used in logs
    pub name: &'static str,
    pub method: Method,
    /// Path template relative to the versioned base URL
    pub path: &'static str,
    pub scope: Scope,
    /// Query or body parameter names the endpoint expects
    pub params: &'static [&'static str],
}

impl Endpoint {
    pub const fn new(
        name: &'static str,
        method: Method,
        path: &'static str,
        scope: Scope,
        params: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            method,
            path,
            scope,
            params,
        }
    }

    /// Placeholder names in template order
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Substitute `args` into the template, in placeholder order
    pub fn resolve(&self, args: &[&str]) -> String {
        debug_assert_eq!(
            args.len(),
            self.placeholders().len(),
            "wrong argument count for endpoint {}",
            self.name
        );

        let mut out = String::with_capacity(self.path.len() + args.iter().map(|a| a.len()).sum::<usize>());
        let mut args = args.iter();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').unwrap_or(after.len());
            out.push_str(args.next().copied().unwrap_or_default());
            rest = after.get(end + 1..).unwrap_or_default();
        }
        out.push_str(rest);
        out
    }

    /// Whether the template is well formed: relative, balanced braces, no
    /// empty or nested placeholders
    pub fn is_valid_template(&self) -> bool {
        if self.path.is_empty() || self.path.starts_with('/') {
            return false;
        }

        let mut open = false;
        let mut name_len = 0;
        for c in self.path.chars() {
            match (c, open) {
                ('{', false) => {
                    open = true;
                    name_len = 0;
                }
                ('}', true) => {
                    if name_len == 0 {
                        return false;
                    }
                    open = false;
                }
                ('{', true) | ('}', false) => return false,
                (_, true) => name_len += 1,
                _ => {}
            }
        }
        !open
    }
}

// ============================================================================
// Public market data
// ============================================================================

pub const MARKETS: Endpoint = Endpoint::new("markets", Method::Get, "pairs", Scope::Public, &[]);

pub const ORDERBOOK: Endpoint =
    Endpoint::new("orderbook", Method::Get, "orderbooks/{market}", Scope::Public, &[]);

pub const ORDERBOOK_BY_ADDRESS: Endpoint = Endpoint::new(
    "orderbook_by_address",
    Method::Get,
    "orderbooks/address/{market}",
    Scope::Public,
    &[],
);

pub const PRICES: Endpoint = Endpoint::new("prices", Method::Get, "prices", Scope::Public, &[]);

pub const LAST_PRICE: Endpoint =
    Endpoint::new("last_price", Method::Get, "prices/{market}/last", Scope::Public, &[]);

pub const PRICE_CHANGES: Endpoint =
    Endpoint::new("price_changes", Method::Get, "prices/recent", Scope::Public, &[]);

pub const CLOSING_PRICE: Endpoint = Endpoint::new(
    "closing_price",
    Method::Get,
    "prices/{market}/closing-price",
    Scope::Public,
    &[],
);

pub const VOLUMES: Endpoint = Endpoint::new("volumes", Method::Get, "volumes", Scope::Public, &[]);

pub const MARKET_VOLUME: Endpoint =
    Endpoint::new("market_volume", Method::Get, "volumes/{market}", Scope::Public, &[]);

pub const TOTAL_VOLUME: Endpoint = Endpoint::new(
    "total_volume",
    Method::Get,
    "volumes/summary/total-trade-price",
    Scope::Public,
    &[],
);

pub const TRADES: Endpoint = Endpoint::new("trades", Method::Get, "trades", Scope::Public, &[]);

pub const MARKET_TRADES: Endpoint =
    Endpoint::new("market_trades", Method::Get, "trades/{market}/all", Scope::Public, &[]);

pub const LAST_TRADE: Endpoint =
    Endpoint::new("last_trade", Method::Get, "trades/{market}/last", Scope::Public, &[]);

// ============================================================================
// Private account data
// ============================================================================

pub const BALANCES: Endpoint =
    Endpoint::new("balances", Method::Get, "wallet/balances", Scope::Private, &[]);

pub const OPEN_ORDERS: Endpoint = Endpoint::new(
    "open_orders",
    Method::Get,
    "orders/open-orders",
    Scope::Private,
    &["coin", "priceCurrency"],
);

pub const UNSETTLED_BALANCE: Endpoint = Endpoint::new(
    "unsettled_balance",
    Method::Get,
    "orders/settles",
    Scope::Private,
    &["coin", "priceCurrency"],
);

// ============================================================================
// Private operations
// ============================================================================

pub const TRANSFER: Endpoint = Endpoint::new(
    "transfer",
    Method::Post,
    "wallet/transfer?cluster={cluster}",
    Scope::Private,
    &["from", "to", "tokenAddress", "amount"],
);

pub const SETTLE_FUNDS: Endpoint = Endpoint::new(
    "settle_funds",
    Method::Post,
    "orders/settles",
    Scope::Private,
    &["coin", "priceCurrency"],
);

pub const PLACE_ORDER: Endpoint = Endpoint::new(
    "place_order",
    Method::Post,
    "orders",
    Scope::Private,
    &["side", "coin", "priceCurrency", "quantity", "price", "orderType"],
);

pub const CANCEL_ORDER: Endpoint = Endpoint::new(
    "cancel_order",
    Method::Put,
    "orders/{order_id}/cancel",
    Scope::Private,
    &[],
);

/// Every endpoint in the catalog
pub const ALL: &[Endpoint] = &[
    MARKETS,
    ORDERBOOK,
    ORDERBOOK_BY_ADDRESS,
    PRICES,
    LAST_PRICE,
    PRICE_CHANGES,
    CLOSING_PRICE,
    VOLUMES,
    MARKET_VOLUME,
    TOTAL_VOLUME,
    TRADES,
    MARKET_TRADES,
    LAST_TRADE,
    BALANCES,
    OPEN_ORDERS,
    UNSETTLED_BALANCE,
    TRANSFER,
    SETTLE_FUNDS,
    PLACE_ORDER,
    CANCEL_ORDER,
];

/// Look up an endpoint by logical name
pub fn by_name(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_templates_valid() {
        for endpoint in ALL {
            assert!(endpoint.is_valid_template(), "bad template for {}", endpoint.name);
        }
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = ALL.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_invalid_templates_detected() {
        let cases = ["/pairs", "", "orders/{}/cancel", "orders/{id", "orders/id}", "a/{{b}}"];
        for path in cases {
            let endpoint = Endpoint::new("bad", Method::Get, path, Scope::Public, &[]);
            assert!(!endpoint.is_valid_template(), "accepted {:?}", path);
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(ORDERBOOK.resolve(&["BTCUSDT"]), "orderbooks/BTCUSDT");
        assert_eq!(CANCEL_ORDER.resolve(&["42"]), "orders/42/cancel");
        assert_eq!(TRANSFER.resolve(&["devnet"]), "wallet/transfer?cluster=devnet");
        assert_eq!(MARKETS.resolve(&[]), "pairs");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(CLOSING_PRICE.placeholders(), vec!["market"]);
        assert!(TOTAL_VOLUME.placeholders().is_empty());
    }

    #[test]
    fn test_private_endpoints() {
        let private: Vec<_> = ALL.iter().filter(|e| e.scope.is_private()).map(|e| e.name).collect();
        assert_eq!(
            private,
            vec![
                "balances",
                "open_orders",
                "unsettled_balance",
                "transfer",
                "settle_funds",
                "place_order",
                "cancel_order"
            ]
        );
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("cancel_order").map(|e| e.method), Some(Method::Put));
        assert!(by_name("nope").is_none());
    }
}

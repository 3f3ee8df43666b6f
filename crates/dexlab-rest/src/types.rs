//! Request body types for private DexLab endpoints
//!
//! Response payloads are returned as `serde_json::Value`; their schemas are
//! owned by the exchange.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Orders
// ============================================================================

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    /// Rest on the book until filled or cancelled
    #[default]
    Limit,
    /// Immediate or cancel
    Ioc,
    /// Rejected if it would take liquidity
    PostOnly,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Ioc => write!(f, "ioc"),
            Self::PostOnly => write!(f, "postOnly"),
        }
    }
}

/// New order request
///
/// `coin` is the asset being traded and `price_currency` the asset it is
/// priced in, e.g. `SRM` and `USDT` for the SRM/USDT market.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub side: OrderSide,
    pub coin: String,
    pub price_currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub order_type: OrderType,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(
        side: OrderSide,
        coin: impl Into<String>,
        price_currency: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            side,
            coin: coin.into(),
            price_currency: price_currency.into(),
            quantity,
            price,
            order_type: OrderType::Limit,
        }
    }

    /// Set the order type
    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }
}

/// Market selector used by open-order, unsettled-balance and settle calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPair {
    pub coin: String,
    pub price_currency: String,
}

impl CoinPair {
    pub fn new(coin: impl Into<String>, price_currency: impl Into<String>) -> Self {
        Self {
            coin: coin.into(),
            price_currency: price_currency.into(),
        }
    }
}

// ============================================================================
// Wallet
// ============================================================================

/// Solana cluster a transfer executes on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    #[default]
    Mainnet,
    Devnet,
    Testnet,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token transfer request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Sending token account
    pub from: String,
    /// Recipient wallet address
    pub to: String,
    /// Mint of the token being sent
    pub token_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        token_address: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            token_address: token_address.into(),
            amount,
        }
    }
}

//! Public market data endpoints
//!
//! These endpoints don't require authentication. Several single-market
//! lookups have no filtered endpoint upstream and scan the matching "list
//! all" response instead.

use dexlab_types::{catalog, Endpoint, MarketId, Query};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::envelope::find_by_key;
use crate::error::RestResult;
use crate::request::Pipeline;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    pipeline: &'a Pipeline,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(pipeline: &'a Pipeline) -> Self {
        Self { pipeline }
    }

    async fn get(&self, endpoint: &Endpoint, args: &[&str]) -> RestResult<Value> {
        self.pipeline.call(endpoint, args, &Query::new()).await
    }

    /// List all available markets
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<Value> {
        self.get(&catalog::MARKETS, &[]).await
    }

    /// Look up one market by pair name
    ///
    /// # Arguments
    /// * `pair` - Trading pair, any case (e.g., "BTC/USDT", "srm/sol")
    #[instrument(skip(self))]
    pub async fn get_market(&self, pair: &str) -> RestResult<Value> {
        let wanted = pair.to_uppercase();
        debug!("Scanning markets for {}", wanted);
        find_by_key(self.get_markets().await?, "market", &wanted)
    }

    /// Get the orderbook for a market
    ///
    /// # Arguments
    /// * `market` - Pair name (e.g., "BTCUSDT") or market address
    #[instrument(skip(self))]
    pub async fn get_orderbook(&self, market: &str) -> RestResult<Value> {
        match MarketId::parse(market) {
            MarketId::Symbol(name) => self.get(&catalog::ORDERBOOK, &[name.as_str()]).await,
            MarketId::Address(address) => self.get(&catalog::ORDERBOOK_BY_ADDRESS, &[address.as_str()]).await,
        }
    }

    /// Latest price of every market
    #[instrument(skip(self))]
    pub async fn get_prices(&self) -> RestResult<Value> {
        self.get(&catalog::PRICES, &[]).await
    }

    /// Latest price of one market
    ///
    /// # Arguments
    /// * `market` - Pair name (e.g., "BTC/USDT") or market address
    #[instrument(skip(self))]
    pub async fn get_price(&self, market: &str) -> RestResult<Value> {
        let market = MarketId::parse(market);
        match &market {
            MarketId::Symbol(_) => find_by_key(self.get_prices().await?, "market", &market.normalized()),
            MarketId::Address(address) => self.get(&catalog::LAST_PRICE, &[address.as_str()]).await,
        }
    }

    /// Recent price change of every market
    #[instrument(skip(self))]
    pub async fn get_price_changes(&self) -> RestResult<Value> {
        self.get(&catalog::PRICE_CHANGES, &[]).await
    }

    /// Price entry of one market, looked up by address
    ///
    /// Scans the `prices` list; there is no per-market change endpoint.
    ///
    /// # Arguments
    /// * `address` - Market address (exact match)
    #[instrument(skip(self))]
    pub async fn get_price_change(&self, address: &str) -> RestResult<Value> {
        find_by_key(self.get_prices().await?, "market_address", address)
    }

    /// Previous day's closing price of a market
    ///
    /// # Arguments
    /// * `market` - Pair name or market address
    #[instrument(skip(self))]
    pub async fn get_closing_price(&self, market: &str) -> RestResult<Value> {
        let market = MarketId::parse(market).normalized();
        self.get(&catalog::CLOSING_PRICE, &[market.as_str()]).await
    }

    /// Trading volume of every market
    #[instrument(skip(self))]
    pub async fn get_volumes(&self) -> RestResult<Value> {
        self.get(&catalog::VOLUMES, &[]).await
    }

    /// Trading volume of one market
    ///
    /// # Arguments
    /// * `market` - Pair name (e.g., "SRM/SOL") or market address
    #[instrument(skip(self))]
    pub async fn get_volume(&self, market: &str) -> RestResult<Value> {
        let market = MarketId::parse(market);
        match &market {
            MarketId::Symbol(_) => find_by_key(self.get_volumes().await?, "name", &market.normalized()),
            MarketId::Address(address) => self.get(&catalog::MARKET_VOLUME, &[address.as_str()]).await,
        }
    }

    /// Total traded value across all markets, in USDT
    #[instrument(skip(self))]
    pub async fn get_total_volume(&self) -> RestResult<Value> {
        self.get(&catalog::TOTAL_VOLUME, &[]).await
    }

    /// Recent trades of every market
    #[instrument(skip(self))]
    pub async fn get_trades(&self) -> RestResult<Value> {
        self.get(&catalog::TRADES, &[]).await
    }

    /// Recent trades of one market
    ///
    /// # Arguments
    /// * `address` - Market address
    #[instrument(skip(self))]
    pub async fn get_market_trades(&self, address: &str) -> RestResult<Value> {
        self.get(&catalog::MARKET_TRADES, &[address]).await
    }

    /// Most recent trade of one market
    ///
    /// # Arguments
    /// * `address` - Market address
    #[instrument(skip(self))]
    pub async fn get_last_trade(&self, address: &str) -> RestResult<Value> {
        self.get(&catalog::LAST_TRADE, &[address]).await
    }
}

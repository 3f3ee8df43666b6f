//! Main REST client implementation

use dexlab_auth::Credentials;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::Pipeline;
use crate::types::{Cluster, OrderRequest, TransferRequest};

/// DexLab REST API client
///
/// Provides access to both public and private endpoints. The client is
/// read-only after construction and cheap to clone.
///
/// # Example
///
/// ```no_run
/// use dexlab_rest::{Credentials, DexLabClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = DexLabClient::new()?;
///     let price = client.get_price("SRM/USDT").await?;
///
///     // With credentials for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = DexLabClient::with_credentials(creds)?;
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DexLabClient {
    pipeline: Pipeline,
}

impl DexLabClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        Ok(Self {
            pipeline: Pipeline::new(config)?,
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.pipeline.has_credentials()
    }

    /// The shared request pipeline, for endpoints without a dedicated method
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.pipeline)
    }

    /// List all markets
    pub async fn get_markets(&self) -> RestResult<Value> {
        self.market().get_markets().await
    }

    /// Look up one market by pair name
    pub async fn get_market(&self, pair: &str) -> RestResult<Value> {
        self.market().get_market(pair).await
    }

    /// Get the orderbook for a pair name or market address
    pub async fn get_orderbook(&self, market: &str) -> RestResult<Value> {
        self.market().get_orderbook(market).await
    }

    /// Latest price of every market
    pub async fn get_prices(&self) -> RestResult<Value> {
        self.market().get_prices().await
    }

    /// Latest price for a pair name or market address
    pub async fn get_price(&self, market: &str) -> RestResult<Value> {
        self.market().get_price(market).await
    }

    /// Recent price change of every market
    pub async fn get_price_changes(&self) -> RestResult<Value> {
        self.market().get_price_changes().await
    }

    /// Price entry of one market, by address
    pub async fn get_price_change(&self, address: &str) -> RestResult<Value> {
        self.market().get_price_change(address).await
    }

    /// Previous day's closing price for a pair name or market address
    pub async fn get_closing_price(&self, market: &str) -> RestResult<Value> {
        self.market().get_closing_price(market).await
    }

    /// Trading volume of every market
    pub async fn get_volumes(&self) -> RestResult<Value> {
        self.market().get_volumes().await
    }

    /// Trading volume for a pair name or market address
    pub async fn get_volume(&self, market: &str) -> RestResult<Value> {
        self.market().get_volume(market).await
    }

    /// Total traded value across all markets
    pub async fn get_total_volume(&self) -> RestResult<Value> {
        self.market().get_total_volume().await
    }

    /// Recent trades of every market
    pub async fn get_trades(&self) -> RestResult<Value> {
        self.market().get_trades().await
    }

    /// Recent trades of one market
    pub async fn get_market_trades(&self, address: &str) -> RestResult<Value> {
        self.market().get_market_trades(address).await
    }

    /// Most recent trade of one market
    pub async fn get_last_trade(&self, address: &str) -> RestResult<Value> {
        self.market().get_last_trade(address).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(&self.pipeline))
    }

    /// Get wallet balances
    pub async fn get_balances(&self) -> RestResult<Value> {
        self.account()?.get_balances().await
    }

    /// Get open orders for a market
    pub async fn get_open_orders(&self, coin: &str, price_currency: &str) -> RestResult<Value> {
        self.account()?.get_open_orders(coin, price_currency).await
    }

    /// Get balances not yet settled for a market
    pub async fn get_unsettled_balance(&self, coin: &str, price_currency: &str) -> RestResult<Value> {
        self.account()?.get_unsettled_balance(coin, price_currency).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(&self.pipeline))
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.trading()?.place_order(order).await
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        self.trading()?.cancel_order(order_id).await
    }

    /// Settle filled funds for a market
    pub async fn settle_funds(&self, coin: &str, price_currency: &str) -> RestResult<Value> {
        self.trading()?.settle_funds(coin, price_currency).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(FundingEndpoints::new(&self.pipeline))
    }

    /// Transfer tokens on mainnet
    pub async fn transfer(&self, transfer: &TransferRequest) -> RestResult<Value> {
        self.funding()?.transfer(transfer, Cluster::Mainnet).await
    }

    fn require_credentials(&self) -> RestResult<()> {
        if self.has_credentials() {
            Ok(())
        } else {
            Err(RestError::AuthRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = DexLabClient::new().unwrap();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_auth_required_error() {
        let client = DexLabClient::new().unwrap();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
        assert!(matches!(client.funding(), Err(RestError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_private_shortcuts_require_credentials() {
        let client = DexLabClient::new().unwrap();
        assert!(matches!(
            client.get_unsettled_balance("SRM", "USDT").await,
            Err(RestError::AuthRequired)
        ));
        assert!(matches!(client.settle_funds("SRM", "USDT").await, Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_client_with_credentials() {
        let client = DexLabClient::with_credentials(Credentials::wallet_key("w")).unwrap();
        assert!(client.has_credentials());
        assert!(client.account().is_ok());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = DexLabClient::with_credentials(Credentials::wallet_key("wallet-secret")).unwrap();
        assert!(!format!("{:?}", client).contains("wallet-secret"));
    }
}

//! Private account endpoints
//!
//! These endpoints require authentication.

use dexlab_types::{catalog, Query};
use serde_json::Value;
use tracing::instrument;

use crate::error::RestResult;
use crate::request::Pipeline;
use crate::types::CoinPair;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    pipeline: &'a Pipeline,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(pipeline: &'a Pipeline) -> Self {
        Self { pipeline }
    }

    /// Get all wallet balances
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<Value> {
        self.pipeline
            .call(&catalog::BALANCES, &[], &Query::new())
            .await
    }

    /// Get orders not yet filled
    ///
    /// # Arguments
    /// * `coin` - Traded asset (e.g., "SRM")
    /// * `price_currency` - Quote asset (e.g., "USDT")
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, coin: &str, price_currency: &str) -> RestResult<Value> {
        let query = Query::from_serialize(&CoinPair::new(coin, price_currency))?;
        self.pipeline.call(&catalog::OPEN_ORDERS, &[], &query).await
    }

    /// Get balances not yet settled
    ///
    /// # Arguments
    /// * `coin` - Traded asset
    /// * `price_currency` - Quote asset
    #[instrument(skip(self))]
    pub async fn get_unsettled_balance(&self, coin: &str, price_currency: &str) -> RestResult<Value> {
        let query = Query::from_serialize(&CoinPair::new(coin, price_currency))?;
        self.pipeline
            .call(&catalog::UNSETTLED_BALANCE, &[], &query)
            .await
    }
}

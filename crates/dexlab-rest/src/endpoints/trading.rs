//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use dexlab_types::{catalog, Query};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{RestError, RestResult};
use crate::request::Pipeline;
use crate::types::{CoinPair, OrderRequest};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    pipeline: &'a Pipeline,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(pipeline: &'a Pipeline) -> Self {
        Self { pipeline }
    }

    /// Place a new order
    ///
    /// # Returns
    /// Operation result including the order id
    #[instrument(skip(self, order), fields(coin = %order.coin, side = %order.side, order_type = %order.order_type))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        let query = Query::from_serialize(order)?;
        debug!(
            "Placing {} {} {}/{} @ {}",
            order.side, order.quantity, order.coin, order.price_currency, order.price
        );
        self.pipeline.call(&catalog::PLACE_ORDER, &[], &query).await
    }

    /// Cancel an order by id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        if order_id.is_empty() {
            return Err(RestError::InvalidParameter("order id cannot be empty".to_string()));
        }
        self.pipeline
            .call(&catalog::CANCEL_ORDER, &[order_id], &Query::new())
            .await
    }

    /// Settle filled funds back to the wallet
    ///
    /// # Arguments
    /// * `coin` - Traded asset
    /// * `price_currency` - Quote asset
    #[instrument(skip(self))]
    pub async fn settle_funds(&self, coin: &str, price_currency: &str) -> RestResult<Value> {
        let query = Query::from_serialize(&CoinPair::new(coin, price_currency))?;
        self.pipeline.call(&catalog::SETTLE_FUNDS, &[], &query).await
    }
}

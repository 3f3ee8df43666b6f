//! Wallet transfer endpoint
//!
//! Requires authentication.

use dexlab_types::{catalog, Query};
use serde_json::Value;
use tracing::instrument;

use crate::error::RestResult;
use crate::request::Pipeline;
use crate::types::{Cluster, TransferRequest};

/// Funding endpoints
pub struct FundingEndpoints<'a> {
    pipeline: &'a Pipeline,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(pipeline: &'a Pipeline) -> Self {
        Self { pipeline }
    }

    /// Send tokens from the wallet
    ///
    /// # Arguments
    /// * `transfer` - Source, recipient, token mint and amount
    /// * `cluster` - Cluster to execute on
    #[instrument(skip(self, transfer), fields(token = %transfer.token_address, amount = %transfer.amount))]
    pub async fn transfer(&self, transfer: &TransferRequest, cluster: Cluster) -> RestResult<Value> {
        let query = Query::from_serialize(transfer)?;
        self.pipeline
            .call(&catalog::TRANSFER, &[cluster.as_str()], &query)
            .await
    }
}

//! REST API client for the DexLab exchange
//!
//! This crate provides a REST API client for DexLab, covering public market
//! data and private account, trading and wallet operations. Backends that
//! share DexLab's endpoint shapes can be targeted through [`BackendProfile`].
//!
//! # Features
//!
//! - **Market Data**: Pairs, orderbooks, prices, price changes, volumes, trades
//! - **Account**: Balances, open orders, unsettled balances
//! - **Trading**: Place and cancel orders, settle funds
//! - **Funding**: Token transfers
//!
//! # Authentication
//!
//! Private endpoints require [`Credentials`]. DexLab authenticates with the
//! wallet private key in a request header; see [`dexlab_auth::AuthScheme`].
//!
//! # Example
//!
//! ```no_run
//! use dexlab_rest::{Credentials, DexLabClient, RestError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = DexLabClient::new()?;
//!     match client.get_market("btc/usdt").await {
//!         Ok(market) => println!("BTC/USDT: {}", market),
//!         Err(RestError::NotFound { market }) => println!("{} is not listed", market),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = DexLabClient::with_credentials(creds)?;
//!     let balances = auth_client.get_balances().await?;
//!     println!("Balances: {}", balances);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every call yields either the unwrapped `data` payload or a [`RestError`]:
//! transport failures, `success: false` envelopes, and markets missing from a
//! list are all distinct variants. Nothing is retried.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod request;
pub mod types;

// Re-export main types
pub use client::DexLabClient;
pub use config::{BackendProfile, ClientConfig};
pub use dexlab_auth::{AuthScheme, Credentials};
pub use error::{RestError, RestResult};
pub use request::{Pipeline, RequestHeaders};

// Re-export request types
pub use types::{Cluster, CoinPair, OrderRequest, OrderSide, OrderType, TransferRequest};

//! Credentials and auth-header injection for the DexLab REST API
//!
//! Two credential shapes are supported: the single wallet key used by DexLab,
//! and a key/secret/subaccount triple used by the keyed backend variant.
//! Private requests pass through an [`AuthScheme`], which decides which
//! headers the credentials contribute.
//!
//! # Example
//!
//! ```no_run
//! use dexlab_auth::{AuthScheme, Credentials, WalletKeyHeader};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     let headers = WalletKeyHeader.headers(&creds);
//!     println!("{} credential header(s)", headers.len());
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod scheme;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use scheme::{default_scheme, AuthScheme, NoAuthHeader, WalletKeyHeader, WALLET_KEY_HEADER};

//! Auth-header injection strategies
//!
//! The request builder asks the configured [`AuthScheme`] for the headers a
//! private request should carry. DexLab authenticates with a single wallet
//! key header. The keyed variant has no documented scheme yet, so its default
//! injects nothing; install a custom [`AuthScheme`] to change that.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::credentials::Credentials;

/// Header carrying the wallet private key on private DexLab requests
pub const WALLET_KEY_HEADER: &str = "x-wallet-private-key";

/// Strategy that turns credentials into request headers
pub trait AuthScheme: fmt::Debug + Send + Sync {
    /// Headers to add to a private request
    fn headers(&self, credentials: &Credentials) -> Vec<(&'static str, String)>;
}

/// Sends the wallet key in [`WALLET_KEY_HEADER`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletKeyHeader;

impl AuthScheme for WalletKeyHeader {
    fn headers(&self, credentials: &Credentials) -> Vec<(&'static str, String)> {
        match credentials.wallet_secret() {
            Some(key) => vec![(WALLET_KEY_HEADER, key.to_string())],
            None => {
                warn!("Wallet key header scheme used with non-wallet credentials");
                Vec::new()
            }
        }
    }
}

/// Adds no headers
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthHeader;

impl AuthScheme for NoAuthHeader {
    fn headers(&self, _credentials: &Credentials) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Scheme matching the credential variant
pub fn default_scheme(credentials: &Credentials) -> Arc<dyn AuthScheme> {
    match credentials {
        Credentials::WalletKey(_) => Arc::new(WalletKeyHeader),
        Credentials::ApiKey { .. } => Arc::new(NoAuthHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_key_header() {
        let creds = Credentials::wallet_key("wallet-secret");
        let headers = WalletKeyHeader.headers(&creds);
        assert_eq!(headers, vec![(WALLET_KEY_HEADER, "wallet-secret".to_string())]);
    }

    #[test]
    fn test_wallet_scheme_ignores_keyed_credentials() {
        let creds = Credentials::api_key("k", "s", None);
        assert!(WalletKeyHeader.headers(&creds).is_empty());
    }

    #[test]
    fn test_default_scheme_per_variant() {
        let wallet = Credentials::wallet_key("w");
        assert_eq!(default_scheme(&wallet).headers(&wallet).len(), 1);

        let keyed = Credentials::api_key("k", "s", Some("sub".to_string()));
        assert!(default_scheme(&keyed).headers(&keyed).is_empty());
    }

    #[derive(Debug)]
    struct ApiKeyHeader;

    impl AuthScheme for ApiKeyHeader {
        fn headers(&self, credentials: &Credentials) -> Vec<(&'static str, String)> {
            credentials
                .key()
                .map(|k| vec![("x-api-key", k.to_string())])
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_custom_scheme() {
        let creds = Credentials::api_key("key-1", "s", None);
        let scheme: Arc<dyn AuthScheme> = Arc::new(ApiKeyHeader);
        assert_eq!(scheme.headers(&creds), vec![("x-api-key", "key-1".to_string())]);
    }
}

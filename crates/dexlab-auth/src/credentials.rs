//! Credentials for private DexLab endpoints
//!
//! # Security
//!
//! Secret material is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, AuthResult};

const WALLET_KEY_VAR: &str = "DEXLAB_WALLET_KEY";
const API_KEY_VAR: &str = "DEXLAB_API_KEY";
const API_SECRET_VAR: &str = "DEXLAB_API_SECRET";
const SUBACCOUNT_VAR: &str = "DEXLAB_SUBACCOUNT";

/// API credentials for private requests
///
/// Immutable once built. The backend validates the values; nothing is
/// checked here.
pub enum Credentials {
    /// Single wallet private key (DexLab)
    WalletKey(SecretString),
    /// Key, secret and optional subaccount (keyed backend variant)
    ApiKey {
        key: String,
        secret: SecretString,
        subaccount: Option<String>,
    },
}

impl Credentials {
    /// Credentials holding a single wallet private key
    pub fn wallet_key(key: impl Into<String>) -> Self {
        Self::WalletKey(SecretString::from(key.into()))
    }

    /// Key/secret credentials with an optional subaccount
    pub fn api_key(
        key: impl Into<String>,
        secret: impl Into<String>,
        subaccount: Option<String>,
    ) -> Self {
        Self::ApiKey {
            key: key.into(),
            secret: SecretString::from(secret.into()),
            subaccount,
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `DEXLAB_WALLET_KEY` if present. Otherwise reads `DEXLAB_API_KEY`,
    /// `DEXLAB_API_SECRET` and the optional `DEXLAB_SUBACCOUNT`.
    pub fn from_env() -> AuthResult<Self> {
        if let Ok(key) = std::env::var(WALLET_KEY_VAR) {
            return Ok(Self::wallet_key(key));
        }

        let key = std::env::var(API_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(format!("{} or {}", WALLET_KEY_VAR, API_KEY_VAR)))?;
        let secret = std::env::var(API_SECRET_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_VAR.to_string()))?;
        let subaccount = std::env::var(SUBACCOUNT_VAR).ok();

        Ok(Self::api_key(key, secret, subaccount))
    }

    /// Wallet private key, if this is the wallet variant
    pub fn wallet_secret(&self) -> Option<&str> {
        match self {
            Self::WalletKey(key) => Some(key.expose_secret()),
            Self::ApiKey { .. } => None,
        }
    }

    /// Public API key, if this is the keyed variant
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::WalletKey(_) => None,
            Self::ApiKey { key, .. } => Some(key),
        }
    }

    /// API secret, if this is the keyed variant
    pub fn secret(&self) -> Option<&str> {
        match self {
            Self::WalletKey(_) => None,
            Self::ApiKey { secret, .. } => Some(secret.expose_secret()),
        }
    }

    pub fn subaccount(&self) -> Option<&str> {
        match self {
            Self::WalletKey(_) => None,
            Self::ApiKey { subaccount, .. } => subaccount.as_deref(),
        }
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretString with same content)
    fn clone(&self) -> Self {
        match self {
            Self::WalletKey(key) => Self::WalletKey(SecretString::from(key.expose_secret().to_string())),
            Self::ApiKey {
                key,
                secret,
                subaccount,
            } => Self::ApiKey {
                key: key.clone(),
                secret: SecretString::from(secret.expose_secret().to_string()),
                subaccount: subaccount.clone(),
            },
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WalletKey(_) => f
                .debug_tuple("WalletKey")
                .field(&"[REDACTED]")
                .finish(),
            Self::ApiKey {
                key, subaccount, ..
            } => f
                .debug_struct("ApiKey")
                .field("key", &format!("{}...", &key[..key.char_indices().nth(8).map_or(key.len(), |(i, _)| i)]))
                .field("secret", &"[REDACTED]")
                .field("subaccount", subaccount)
                .finish(),
        }
    }
}

//! Error types for REST API operations

use dexlab_auth::AuthError;
use dexlab_types::QueryError;
use serde_json::Value;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Network failure, timeout, or unreadable body
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// API answered with `success: false`
    #[error("API error: {message}")]
    Api {
        /// Message pulled from the envelope, if any
        message: String,
        /// The envelope exactly as returned
        envelope: Value,
    },

    /// A single-market lookup found no matching entry
    #[error("Market not found: {market}")]
    NotFound {
        /// Identifier that was searched for
        market: String,
    },

    /// Missing credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Credential handling failed
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Create an API error from a failed envelope
    pub fn from_envelope(envelope: Value) -> Self {
        let message = envelope_message(&envelope).unwrap_or_else(|| "Unknown error".to_string());
        Self::Api { message, envelope }
    }

    /// Whether the request never produced a usable response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::MalformedResponse(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The raw error envelope, for API errors
    pub fn envelope(&self) -> Option<&Value> {
        match self {
            Self::Api { envelope, .. } => Some(envelope),
            _ => None,
        }
    }
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

fn envelope_message(envelope: &Value) -> Option<String> {
    ["message", "error", "msg"].iter().find_map(|key| match envelope.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

//! Error types for credential handling

/// Errors that can occur while loading or applying credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Credential value cannot be carried in an HTTP header
    #[error("Invalid header value for {0}")]
    InvalidHeader(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

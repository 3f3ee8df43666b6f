//! Client configuration

use std::fmt;
use std::sync::Arc;

use dexlab_auth::{AuthScheme, Credentials};
use dexlab_types::Scope;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Product identifier sent as `User-Agent`
pub const DEFAULT_USER_AGENT: &str = "DexLab-Trader/1.0";

/// DexLab public API host
pub const DEXLAB_PUBLIC_URL: &str = "https://api.dexlab.space";

/// DexLab private API host
pub const DEXLAB_PRIVATE_URL: &str = "https://trade-api.dexlab.space";

/// DexLab API version segment
pub const DEXLAB_API_VERSION: &str = "v1";

/// Hosts and version segment of one backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendProfile {
    pub public_url: String,
    pub private_url: String,
    pub version: String,
}

impl BackendProfile {
    /// Profile for any backend sharing the DexLab endpoint shapes
    pub fn new(
        public_url: impl Into<String>,
        private_url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            public_url: public_url.into().trim_end_matches('/').to_string(),
            private_url: private_url.into().trim_end_matches('/').to_string(),
            version: version.into().trim_matches('/').to_string(),
        }
    }

    /// Production DexLab hosts
    pub fn dexlab() -> Self {
        Self::new(DEXLAB_PUBLIC_URL, DEXLAB_PRIVATE_URL, DEXLAB_API_VERSION)
    }

    /// Host serving the given scope
    pub fn base_url(&self, scope: Scope) -> &str {
        match scope {
            Scope::Public => &self.public_url,
            Scope::Private => &self.private_url,
        }
    }
}

impl Default for BackendProfile {
    fn default() -> Self {
        Self::dexlab()
    }
}

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// Hosts and version
    pub profile: BackendProfile,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Overrides the scheme derived from the credential variant
    pub auth_scheme: Option<Arc<dyn AuthScheme>>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            profile: BackendProfile::default(),
            credentials: None,
            auth_scheme: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set backend hosts
    pub fn with_profile(mut self, profile: BackendProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom auth-header scheme
    pub fn with_auth_scheme(mut self, scheme: Arc<dyn AuthScheme>) -> Self {
        self.auth_scheme = Some(scheme);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("profile", &self.profile)
            .field("has_credentials", &self.credentials.is_some())
            .field("auth_scheme", &self.auth_scheme)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

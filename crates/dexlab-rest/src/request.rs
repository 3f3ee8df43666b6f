//! Shared request pipeline
//!
//! Every endpoint method goes through [`Pipeline::send`]: build headers,
//! build the URL, dispatch, then unwrap the response envelope.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dexlab_auth::{default_scheme, AuthError, AuthScheme, Credentials, NoAuthHeader};
use dexlab_types::{Endpoint, Method, Query, Scope};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::{BackendProfile, ClientConfig};
use crate::envelope::unwrap_envelope;
use crate::error::{RestError, RestResult};

/// Headers for one request
///
/// Credential values are kept apart so `Debug` can redact them.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    standard: Vec<(&'static str, String)>,
    credential: Vec<(&'static str, String)>,
}

impl RequestHeaders {
    /// Look up a header value (case-insensitive name)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.standard.len() + self.credential.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.standard
            .iter()
            .chain(self.credential.iter())
            .map(|(n, v)| (*n, v.as_str()))
    }

    /// Convert into a reqwest header map
    pub fn to_header_map(&self) -> RestResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.len());
        for (name, value) in self.iter() {
            let header_name = HeaderName::try_from(name)
                .map_err(|_| RestError::Auth(AuthError::InvalidHeader(name.to_string())))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| RestError::Auth(AuthError::InvalidHeader(name.to_string())))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

impl fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.standard {
            map.entry(name, value);
        }
        for (name, _) in &self.credential {
            map.entry(name, &"[REDACTED]");
        }
        map.finish()
    }
}

/// Encode parameters as a query string.
///
/// Array values repeat the key, spaces become `+`, and `/`, `[`, `]` are left
/// unescaped. Null values are skipped.
pub fn encode_query(query: &Query) -> String {
    let mut pairs = Vec::with_capacity(query.len());
    for (key, value) in query.iter() {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    pairs.push(format!("{}={}", encode_component(key), encode_component(&scalar(item))));
                }
            }
            other => pairs.push(format!("{}={}", encode_component(key), encode_component(&scalar(other)))),
        }
    }
    pairs.join("&")
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn encode_component(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%20", "+")
        .replace("%2F", "/")
        .replace("%5B", "[")
        .replace("%5D", "]")
}

/// Request builder and dispatcher shared by all endpoint groups
#[derive(Clone)]
pub struct Pipeline {
    http_client: Client,
    profile: BackendProfile,
    user_agent: String,
    credentials: Option<Credentials>,
    auth_scheme: Arc<dyn AuthScheme>,
}

impl Pipeline {
    /// Build the pipeline from configuration
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let auth_scheme = match (&config.auth_scheme, &config.credentials) {
            (Some(scheme), _) => scheme.clone(),
            (None, Some(credentials)) => default_scheme(credentials),
            (None, None) => Arc::new(NoAuthHeader),
        };

        info!(
            public_url = %config.profile.public_url,
            private_url = %config.profile.private_url,
            has_credentials = config.credentials.is_some(),
            "Created DexLab REST pipeline"
        );

        Ok(Self {
            http_client,
            profile: config.profile,
            user_agent: config.user_agent,
            credentials: config.credentials,
            auth_scheme,
        })
    }

    pub fn profile(&self) -> &BackendProfile {
        &self.profile
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Headers for a request in the given scope
    ///
    /// Private scope adds whatever the auth scheme contributes.
    pub fn build_headers(&self, scope: Scope) -> RequestHeaders {
        let standard = vec![
            ("Accept", "application/json".to_string()),
            ("User-Agent", self.user_agent.clone()),
        ];

        let credential = match (scope, &self.credentials) {
            (Scope::Private, Some(credentials)) => self.auth_scheme.headers(credentials),
            _ => Vec::new(),
        };

        RequestHeaders {
            standard,
            credential,
        }
    }

    /// Full URL for a request
    ///
    /// Only GET requests carry the query string; other verbs send the
    /// parameters as a JSON body.
    pub fn build_url(&self, scope: Scope, method: Method, path: &str, query: &Query) -> String {
        let url = format!("{}/{}/{}", self.profile.base_url(scope), self.profile.version, path);

        if method.has_body() || query.is_empty() {
            return url;
        }

        let encoded = encode_query(query);
        if encoded.is_empty() {
            url
        } else if path.contains('?') {
            format!("{}&{}", url, encoded)
        } else {
            format!("{}?{}", url, encoded)
        }
    }

    /// Send one request and unwrap the envelope
    #[instrument(skip(self, query))]
    pub async fn send(&self, scope: Scope, method: Method, path: &str, query: &Query) -> RestResult<Value> {
        if scope.is_private() && self.credentials.is_none() {
            return Err(RestError::AuthRequired);
        }

        let headers = self.build_headers(scope).to_header_map()?;
        let url = self.build_url(scope, method, path, query);

        debug!("Sending {} request to {}", method, path);

        let request = match method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url).json(query),
            Method::Put => self.http_client.put(&url).json(query),
            Method::Delete => self.http_client.delete(&url).json(query),
        };

        let response = request.headers(headers).send().await.map_err(|e| {
            warn!(error = %e, "Request failed");
            RestError::Transport(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read response body");
            RestError::Transport(e)
        })?;

        let envelope: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(%status, error = %e, "Response is not JSON");
            RestError::MalformedResponse(format!("HTTP {}: {}", status, e))
        })?;

        unwrap_envelope(envelope).map_err(|envelope| {
            debug!(%status, "API returned an error envelope");
            RestError::from_envelope(envelope)
        })
    }

    /// Send a request for a catalog endpoint
    pub async fn call(&self, endpoint: &Endpoint, args: &[&str], query: &Query) -> RestResult<Value> {
        debug!(endpoint = endpoint.name, "Calling endpoint");
        self.send(endpoint.scope, endpoint.method, &endpoint.resolve(args), query)
            .await
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("profile", &self.profile)
            .field("user_agent", &self.user_agent)
            .field("has_credentials", &self.has_credentials())
            .field("auth_scheme", &self.auth_scheme)
            .finish()
    }
}

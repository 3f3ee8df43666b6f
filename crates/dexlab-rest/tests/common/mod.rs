//! In-process fixture HTTP server for integration tests
//!
//! Serves canned JSON bodies by path and records every request it receives.
//! Public routes live under `/public`, private routes under `/private`, so
//! tests can tell which host a request was sent to.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use dexlab_rest::{BackendProfile, ClientConfig, Credentials, DexLabClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Sample market list (`GET pairs`)
pub const PAIRS: &str = r#"{
    "success": true,
    "data": [
        {"market": "SRM/USDT", "address": "ByRys5tuUWDgL73G8JBAEfkdFf8JWBzPBDHsBVQ5vbQA", "baseCoin": "SRM"},
        {"market": "BTC/USDT", "address": "C1EuT9VokAKLiW7i2ASnZUvxDoKuKkCpDDeNxAptuNe4", "baseCoin": "BTC"}
    ]
}"#;

/// Sample prices (`GET prices`)
pub const PRICES: &str = r#"{
    "success": true,
    "data": [
        {"market": "SRM/USDT", "market_address": "ByRys5tuUWDgL73G8JBAEfkdFf8JWBzPBDHsBVQ5vbQA", "price": 3.71},
        {"market": "BTC/USDT", "market_address": "C1EuT9VokAKLiW7i2ASnZUvxDoKuKkCpDDeNxAptuNe4", "price": 57000.5}
    ]
}"#;

/// Sample price changes (`GET prices/recent`)
pub const PRICE_CHANGES: &str = r#"{
    "success": true,
    "data": [
        {"market": "SRM/USDT", "market_address": "ByRys5tuUWDgL73G8JBAEfkdFf8JWBzPBDHsBVQ5vbQA", "change": -2.4},
        {"market": "BTC/USDT", "market_address": "C1EuT9VokAKLiW7i2ASnZUvxDoKuKkCpDDeNxAptuNe4", "change": 1.1}
    ]
}"#;

/// Sample volumes (`GET volumes`)
pub const VOLUMES: &str = r#"{
    "success": true,
    "data": [
        {"name": "SRM/USDT", "volume": 120000},
        {"name": "SRM/SOL", "volume": 4500}
    ]
}"#;

/// Sample orderbook payload
pub const ORDERBOOK: &str = r#"{
    "success": true,
    "data": {"asks": [[3.72, 100.0]], "bids": [[3.70, 250.0]]}
}"#;

/// Generic successful operation
pub const OK: &str = r#"{"success": true, "data": {"result": "ok"}}"#;

/// Failed envelope
pub const FAILURE: &str = r#"{"success": false, "message": "Invalid wallet key", "code": 401}"#;

pub const SRM_USDT_ADDRESS: &str = "ByRys5tuUWDgL73G8JBAEfkdFf8JWBzPBDHsBVQ5vbQA";

/// A request as seen by the fixture server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

type Routes = HashMap<String, (u16, String)>;

/// Fixture server bound to an ephemeral local port
pub struct FixtureServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl FixtureServer {
    /// Start serving `routes`, given as (full path, body) pairs
    pub async fn start(routes: &[(&str, &str)]) -> Self {
        let routes = routes
            .iter()
            .map(|(path, body)| (path.to_string(), (200, body.to_string())))
            .collect();
        Self::start_with_status(routes).await
    }

    /// Start serving routes with explicit status codes
    pub async fn start_with_status(routes: Routes) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fixture server");
        let addr = listener.local_addr().expect("local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let recorded = requests.clone();
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &routes, &recorded).await;
                });
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// Backend profile pointing at this server
    pub fn profile(&self) -> BackendProfile {
        BackendProfile::new(
            format!("http://{}/public", self.addr),
            format!("http://{}/private", self.addr),
            "v1",
        )
    }

    /// Public-only client
    pub fn client(&self) -> DexLabClient {
        DexLabClient::with_config(ClientConfig::new().with_profile(self.profile()).with_timeout(5))
            .expect("build client")
    }

    /// Client holding the given credentials
    pub fn client_with(&self, credentials: Credentials) -> DexLabClient {
        DexLabClient::with_config(
            ClientConfig::new()
                .with_profile(self.profile())
                .with_credentials(credentials)
                .with_timeout(5),
        )
        .expect("build client")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("at least one request")
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Address nothing is listening on
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

/// Server that accepts connections and never answers
pub async fn silent_server() -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    (addr, handle)
}

async fn serve(
    mut stream: TcpStream,
    routes: &Routes,
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let target = request_line.next().unwrap_or_default().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = (header_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    let request = RecordedRequest {
        method,
        target,
        headers,
        body,
    };
    let (status, response_body) = routes
        .get(request.path())
        .cloned()
        .unwrap_or_else(|| (404, r#"{"success": false, "message": "no route"}"#.to_string()));
    recorded.lock().expect("requests lock").push(request);

    let response = format!(
        "HTTP/1.1 {} Fixture\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        response_body.len(),
        response_body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

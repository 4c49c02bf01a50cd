//! HTTP transport abstraction layer
//!
//! Provides a trait seam over the GET primitive so the pagination logic can
//! be exercised without network access. The production implementation wraps
//! a reqwest Client with a fixed per-request timeout; the mock serves
//! scripted responses keyed by the full request URL.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Status code and raw body of one completed HTTP exchange.
///
/// Transport-level failures (connection refused, timeout, DNS) surface as
/// `Err` from [`HttpFetcher::get`]; a non-success status is still an `Ok`
/// response, left to the caller's policy.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for issuing GET requests
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Issue a GET request and return the status and full body.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Real implementation backed by a reqwest Client
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Create a fetcher whose requests all time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Mock implementation of HttpFetcher for testing
pub struct MockHttpFetcher {
    /// Scripted outcome per request URL; scripts are replayable, so the
    /// same URL may be requested any number of times
    scripts: Arc<Mutex<HashMap<String, ScriptedCall>>>,
    /// URLs requested so far, in call order
    requested: Arc<Mutex<Vec<String>>>,
}

#[derive(Debug, Clone)]
struct ScriptedCall {
    delay: Option<Duration>,
    outcome: ScriptedOutcome,
}

#[derive(Debug, Clone)]
enum ScriptedOutcome {
    Response { status: u16, body: Vec<u8> },
    TransportError(String),
}

impl MockHttpFetcher {
    /// Create a new MockHttpFetcher instance
    pub fn new() -> Self {
        Self {
            scripts: Arc::new(Mutex::new(HashMap::new())),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the response served for `url`
    pub async fn script_response(&self, url: &str, status: u16, body: &[u8]) {
        self.script(
            url,
            None,
            ScriptedOutcome::Response {
                status,
                body: body.to_vec(),
            },
        )
        .await;
    }

    /// Script a response served only after an artificial delay
    pub async fn script_response_with_delay(
        &self,
        url: &str,
        status: u16,
        body: &[u8],
        delay: Duration,
    ) {
        self.script(
            url,
            Some(delay),
            ScriptedOutcome::Response {
                status,
                body: body.to_vec(),
            },
        )
        .await;
    }

    /// Script a transport-level failure for `url`
    pub async fn script_transport_error(&self, url: &str, message: &str) {
        self.script(url, None, ScriptedOutcome::TransportError(message.to_string()))
            .await;
    }

    async fn script(&self, url: &str, delay: Option<Duration>, outcome: ScriptedOutcome) {
        self.scripts
            .lock()
            .await
            .insert(url.to_string(), ScriptedCall { delay, outcome });
    }

    /// Get the URLs requested so far, in the order the calls arrived
    pub async fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

impl Default for MockHttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetcher for MockHttpFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requested.lock().await.push(url.to_string());

        let call = match self.scripts.lock().await.get(url).cloned() {
            Some(call) => call,
            None => return Err(Error::Network(format!("no scripted response for {url}"))),
        };

        if let Some(delay) = call.delay {
            tokio::time::sleep(delay).await;
        }

        match call.outcome {
            ScriptedOutcome::Response { status, body } => Ok(HttpResponse { status, body }),
            ScriptedOutcome::TransportError(message) => Err(Error::Network(message)),
        }
    }
}

//! reqwest-backed [`HttpClient`].
//!
//! The adapter owns one pooled `reqwest::Client`, built on first use and
//! dropped by [`TransportAdapter::release`]. Each call moves through
//! `Idle -> Sending -> Completed | Failed`; a `Completed` exchange keeps the
//! live response (and its connection) until the body is read, the next
//! request starts, or the adapter is released.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::TransportError;
use crate::request::{HttpMethod, HttpRequest, HttpResponse};
use crate::HttpClient;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(10);
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("qrsheet/", env!("CARGO_PKG_VERSION"));

/// Fixed network timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportTimeouts {
    pub connect: Duration,
    pub write: Duration,
    pub read: Duration,
}

impl Default for TransportTimeouts {
    fn default() -> Self {
        Self {
            connect: CONNECT_TIMEOUT,
            write: WRITE_TIMEOUT,
            read: READ_TIMEOUT,
        }
    }
}

impl TransportTimeouts {
    /// Upper bound for a whole request. reqwest has no separate write
    /// timeout, so the upload phase is bounded by this ceiling.
    #[must_use]
    pub fn request_ceiling(&self) -> Duration {
        self.connect + self.write + self.read
    }
}

/// Observable lifecycle state of the current exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    Sending,
    Completed,
    Failed,
}

/// Counters of responses opened and released over the adapter's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangeStats {
    pub opened: u64,
    pub released: u64,
}

impl ExchangeStats {
    /// Responses currently holding a connection. Never more than one.
    #[must_use]
    pub const fn open(&self) -> u64 {
        self.opened - self.released
    }
}

enum Exchange {
    Idle,
    Sending,
    Completed(reqwest::Response),
    Failed,
}

impl Exchange {
    const fn state(&self) -> ExchangeState {
        match self {
            Self::Idle => ExchangeState::Idle,
            Self::Sending => ExchangeState::Sending,
            Self::Completed(_) => ExchangeState::Completed,
            Self::Failed => ExchangeState::Failed,
        }
    }
}

/// Single-exchange HTTP transport with a lazily built connection pool.
///
/// At most one response is open at a time; starting a request closes the
/// previous one. Dropping the adapter releases the pool.
pub struct TransportAdapter {
    timeouts: TransportTimeouts,
    client: Option<reqwest::Client>,
    exchange: Exchange,
    stats: ExchangeStats,
}

impl Default for TransportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportAdapter {
    /// Create an adapter with the default user agent and timeouts. No
    /// connections are made until the first request.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeouts: TransportTimeouts::default(),
            client: None,
            exchange: Exchange::Idle,
            stats: ExchangeStats::default(),
        }
    }

    #[must_use]
    pub const fn timeouts(&self) -> TransportTimeouts {
        self.timeouts
    }

    #[must_use]
    pub const fn state(&self) -> ExchangeState {
        self.exchange.state()
    }

    #[must_use]
    pub const fn stats(&self) -> ExchangeStats {
        self.stats
    }

    /// Whether a connection pool is currently held.
    #[must_use]
    pub const fn has_pool(&self) -> bool {
        self.client.is_some()
    }

    fn client(&mut self) -> Result<reqwest::Client, TransportError> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(self.timeouts.connect)
            .read_timeout(self.timeouts.read)
            .timeout(self.timeouts.request_ceiling())
            .build()
            .map_err(TransportError::Client)?;
        tracing::debug!(user_agent = USER_AGENT, "built HTTP connection pool");
        self.client = Some(client.clone());
        Ok(client)
    }
}

impl HttpClient for TransportAdapter {
    async fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.finish_exchange();

        let method = to_reqwest_method(request.method)?;
        let url = reqwest::Url::parse(&request.uri).map_err(|e| TransportError::InvalidUri {
            uri: request.uri.clone(),
            reason: e.to_string(),
        })?;
        let client = self.client()?;

        let mut builder = client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if request.method.has_body() {
            builder = builder.body(request.body.unwrap_or_default());
        }

        self.exchange = Exchange::Sending;
        tracing::trace!(method = %request.method, uri = %request.uri, "sending request");
        match builder.send().await {
            Ok(response) => {
                let described = describe(&response);
                tracing::debug!(
                    method = %request.method,
                    uri = %request.uri,
                    status = described.status,
                    "received response"
                );
                self.exchange = Exchange::Completed(response);
                self.stats.opened += 1;
                Ok(described)
            }
            Err(error) => {
                self.exchange = Exchange::Failed;
                tracing::warn!(method = %request.method, uri = %request.uri, %error, "request failed");
                Err(TransportError::Http(error))
            }
        }
    }

    async fn read_body(&mut self) -> Result<Vec<u8>, TransportError> {
        let response = match std::mem::replace(&mut self.exchange, Exchange::Idle) {
            Exchange::Completed(response) => response,
            other => {
                self.exchange = other;
                return Err(TransportError::NoOpenExchange);
            }
        };
        self.stats.released += 1;
        match response.bytes().await {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(error) => {
                self.exchange = Exchange::Failed;
                Err(TransportError::Http(error))
            }
        }
    }

    fn finish_exchange(&mut self) {
        if let Exchange::Completed(response) = std::mem::replace(&mut self.exchange, Exchange::Idle) {
            drop(response);
            self.stats.released += 1;
            tracing::trace!("closed unread response");
        }
    }

    fn release(&mut self) {
        self.finish_exchange();
        if self.client.take().is_some() {
            tracing::debug!("released HTTP connection pool");
        }
    }
}

impl Drop for TransportAdapter {
    fn drop(&mut self) {
        self.release();
    }
}

fn to_reqwest_method(method: HttpMethod) -> Result<reqwest::Method, TransportError> {
    match method {
        HttpMethod::Get => Ok(reqwest::Method::GET),
        HttpMethod::Post => Ok(reqwest::Method::POST),
        HttpMethod::Put => Ok(reqwest::Method::PUT),
        HttpMethod::Delete => Ok(reqwest::Method::DELETE),
        HttpMethod::Head | HttpMethod::Patch => Err(TransportError::UnsupportedMethod(method)),
    }
}

fn describe(response: &reqwest::Response) -> HttpResponse {
    let headers: BTreeMap<String, String> = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    HttpResponse {
        status: response.status().as_u16(),
        content_type: headers.get("content-type").cloned(),
        content_length: response.content_length(),
        headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts_match_mobile_policy() {
        let timeouts = TransportTimeouts::default();
        assert_eq!(timeouts.connect, Duration::from_secs(10));
        assert_eq!(timeouts.write, Duration::from_secs(10));
        assert_eq!(timeouts.read, Duration::from_secs(30));
        assert_eq!(timeouts.request_ceiling(), Duration::from_secs(50));
    }

    #[test]
    fn new_adapter_is_idle_without_pool() {
        let adapter = TransportAdapter::new();
        assert_eq!(adapter.timeouts(), TransportTimeouts::default());
        assert_eq!(adapter.state(), ExchangeState::Idle);
        assert!(!adapter.has_pool());
        assert_eq!(adapter.stats().open(), 0);
    }

    #[test]
    fn head_and_patch_are_unsupported() {
        assert!(matches!(
            to_reqwest_method(HttpMethod::Patch),
            Err(TransportError::UnsupportedMethod(HttpMethod::Patch))
        ));
        assert!(to_reqwest_method(HttpMethod::Head).is_err());
        assert!(to_reqwest_method(HttpMethod::Delete).is_ok());
    }

    #[test]
    fn release_without_exchange_is_noop() {
        let mut adapter = TransportAdapter::new();
        adapter.release();
        adapter.release();
        assert_eq!(adapter.stats(), ExchangeStats::default());
    }
}

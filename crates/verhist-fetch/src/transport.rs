//! Pluggable HTTP transports.
//!
//! Clients execute every request through a [`Transport`]. The default is
//! [`ReqwestTransport`]; [`LoggingTransport`] wraps any other transport and
//! records outbound requests and inbound responses with `tracing`.

use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use crate::ClientConfig;

/// Executes HTTP requests on behalf of a client.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Sends the request and returns the response without inspecting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered.
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        (**self).execute(request).await
    }
}

/// Transport backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport using the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing [`reqwest::Client`].
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        self.client.execute(request).await
    }
}

/// Transport decorator that logs requests and responses.
#[derive(Debug, Clone)]
pub struct LoggingTransport {
    inner: Arc<dyn Transport>,
}

impl LoggingTransport {
    /// Wraps `inner`, forwarding every request to it.
    #[must_use]
    pub const fn new(inner: Arc<dyn Transport>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Transport for LoggingTransport {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");
        trace!(headers = ?request.headers(), "request headers");

        let start = Instant::now();
        let result = self.inner.execute(request).await;
        let elapsed_ms = start.elapsed().as_millis();

        match &result {
            Ok(response) => {
                debug!(
                    %method,
                    %url,
                    status = response.status().as_u16(),
                    elapsed_ms,
                    "received response"
                );
                trace!(headers = ?response.headers(), "response headers");
            }
            Err(e) => debug!(%method, %url, elapsed_ms, error = %e, "request failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use reqwest::{Method, StatusCode};

    #[tokio::test]
    async fn test_logging_transport_forwards() {
        let stub = Arc::new(StubTransport::new(StatusCode::IM_A_TEAPOT, "short and stout"));
        let transport = LoggingTransport::new(stub.clone());

        let url = "http://example.com/history".parse().unwrap();
        let response = transport
            .execute(Request::new(Method::GET, url))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(response.text().await.unwrap(), "short and stout");
        assert_eq!(stub.calls(), 1);
        assert_eq!(stub.urls(), vec!["http://example.com/history".to_string()]);
    }

    #[test]
    fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }
}

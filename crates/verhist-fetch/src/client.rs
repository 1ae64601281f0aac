//! Client configuration and the shared GET pipeline.

use bytes::Bytes;
use reqwest::{Method, Request, StatusCode};
use url::Url;

use crate::url::{HISTORY_BASE_URL, PROXY_BASE_URL};
use crate::{FetchError, Transport};

/// Configuration shared by both clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the version history API.
    pub history_url: String,
    /// Base URL of the release history proxy.
    pub proxy_url: String,
    /// User agent sent with outgoing requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            history_url: HISTORY_BASE_URL.to_string(),
            proxy_url: PROXY_BASE_URL.to_string(),
            user_agent: format!("verhist/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the version history API base URL.
    #[must_use]
    pub fn with_history_url(mut self, url: impl Into<String>) -> Self {
        self.history_url = url.into();
        self
    }

    /// Sets the release history proxy base URL.
    #[must_use]
    pub fn with_proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = url.into();
        self
    }

    /// Sets the user agent sent with outgoing requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Issues a single GET for `url` and returns the response body.
///
/// Only `200 OK` is accepted; any other status fails before the body is read.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] if the request fails and
/// [`FetchError::Status`] on a non-OK status.
pub(crate) async fn fetch(transport: &dyn Transport, url: Url) -> Result<Bytes, FetchError> {
    let request = Request::new(Method::GET, url.clone());
    let response = transport.execute(request).await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.bytes().await?)
}

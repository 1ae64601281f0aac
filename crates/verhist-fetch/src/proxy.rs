//! Release history (Omaha) proxy client.

use std::sync::Arc;
use verhist_types::{ProxyVersion, Release, VersionEntry};

use crate::client::fetch;
use crate::decode::{decode_entries, decode_history};
use crate::url::{entries_url, history_url};
use crate::{ClientConfig, FetchError, LoggingTransport, ReqwestTransport, Transport};

/// Client for the release history proxy.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl ProxyClient {
    /// Creates a client with a [`ReqwestTransport`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: config.proxy_url,
        }
    }

    /// Wraps the current transport in a [`LoggingTransport`].
    #[must_use]
    pub fn with_logging(self) -> Self {
        Self {
            transport: Arc::new(LoggingTransport::new(self.transport)),
            base_url: self.base_url,
        }
    }

    /// Returns the proxy base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieves the recent release history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or any row cannot be decoded.
    pub async fn recent(&self) -> Result<Vec<Release>, FetchError> {
        let url = history_url(&self.base_url)?;
        let body = fetch(self.transport.as_ref(), url).await?;
        Ok(decode_history(&body).await?)
    }

    /// Retrieves the current version entries, grouped by OS.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn entries(&self) -> Result<Vec<VersionEntry>, FetchError> {
        let url = entries_url(&self.base_url)?;
        let body = fetch(self.transport.as_ref(), url).await?;
        Ok(decode_entries(&body)?)
    }

    /// Returns the current version for `os` on `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] if no entry matches, or an error if
    /// the request or decoding fails.
    pub async fn latest(&self, os: &str, channel: &str) -> Result<ProxyVersion, FetchError> {
        let entries = self.entries().await?;
        find_latest(entries, os, channel)
    }
}

/// Finds the first version for `channel` within the first entry for `os`
/// that carries it.
fn find_latest(
    entries: Vec<VersionEntry>,
    os: &str,
    channel: &str,
) -> Result<ProxyVersion, FetchError> {
    entries
        .into_iter()
        .filter(|entry| entry.os == os)
        .flat_map(|entry| entry.versions)
        .find(|version| version.channel == channel)
        .ok_or_else(|| FetchError::NotFound {
            channel: channel.to_string(),
            os: os.to_string(),
        })
}

/// Retrieves the recent release history using a default client.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the request fails.
pub async fn recent() -> Result<Vec<Release>, FetchError> {
    ProxyClient::with_defaults()?.recent().await
}

/// Retrieves the current version entries using a default client.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the request fails.
pub async fn entries() -> Result<Vec<VersionEntry>, FetchError> {
    ProxyClient::with_defaults()?.entries().await
}

/// Returns the current version for `os` on `channel` using a default client.
///
/// # Errors
///
/// Returns an error if the client cannot be created, the request fails, or
/// nothing matches.
pub async fn latest(os: &str, channel: &str) -> Result<ProxyVersion, FetchError> {
    ProxyClient::with_defaults()?.latest(os, channel).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn version(channel: &str, version: &str) -> ProxyVersion {
        ProxyVersion {
            os: "win".to_string(),
            channel: channel.to_string(),
            version: version.to_string(),
            ..Default::default()
        }
    }

    fn entries_json() -> String {
        let entries = vec![VersionEntry {
            os: "win".to_string(),
            versions: vec![version("beta", "B"), version("stable", "A")],
        }];
        serde_json::to_string(&entries).unwrap()
    }

    #[test]
    fn test_find_latest() {
        let entries = vec![
            VersionEntry {
                os: "mac".to_string(),
                versions: vec![version("stable", "M")],
            },
            VersionEntry {
                os: "win".to_string(),
                versions: vec![version("beta", "B"), version("stable", "A")],
            },
        ];
        let found = find_latest(entries, "win", "stable").unwrap();
        assert_eq!(found.version, "A");
    }

    #[tokio::test]
    async fn test_latest_match() {
        let stub = Arc::new(StubTransport::ok(entries_json()));
        let config = ClientConfig::default().with_proxy_url("http://stub.local");
        let client = ProxyClient::with_transport(config, Arc::clone(&stub));

        let latest = client.latest("win", "stable").await.unwrap();
        assert_eq!(latest.version, "A");
        assert_eq!(stub.urls(), vec!["http://stub.local/json".to_string()]);
    }

    #[tokio::test]
    async fn test_latest_not_found() {
        let stub = Arc::new(StubTransport::ok(entries_json()));
        let config = ClientConfig::default().with_proxy_url("http://stub.local");
        let client = ProxyClient::with_transport(config, stub);

        let err = client.latest("mac", "stable").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "could not find latest version for channel stable (mac)"
        );
    }

    #[tokio::test]
    async fn test_recent_against_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/history"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "os,channel,version,timestamp\n\
                 android,beta,122.0.6261.43,2024-01-25 17:33:48.123\n\
                 linux,stable,121.0.6167.85,2024-01-23 18:01:02.5\n",
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = ClientConfig::default().with_proxy_url(mock_server.uri());
        let client = ProxyClient::new(config).unwrap().with_logging();

        let releases = client.recent().await.unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].os, "android");
        assert_eq!(releases[1].version, "121.0.6167.85");
    }

    #[tokio::test]
    async fn test_entries_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&mock_server)
            .await;

        let config = ClientConfig::default().with_proxy_url(mock_server.uri());
        let client = ProxyClient::new(config).unwrap();

        let err = client.entries().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}

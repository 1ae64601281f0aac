//! Chrome version history API client.
//!
//! See <https://developer.chrome.com/docs/web-platform/versionhistory/guide>.

use std::sync::Arc;
use verhist_types::{Channel, ChannelType, Platform, PlatformType, Version};

use crate::client::fetch;
use crate::decode::{decode_channels, decode_platforms, decode_versions};
use crate::url::{channels_url, platforms_url, versions_url};
use crate::{ClientConfig, FetchError, LoggingTransport, ReqwestTransport, Transport};

/// Client for the Chrome version history API.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl HistoryClient {
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
            base_url: config.history_url,
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

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists the known platforms.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn platforms(&self) -> Result<Vec<Platform>, FetchError> {
        let url = platforms_url(&self.base_url)?;
        let body = fetch(self.transport.as_ref(), url).await?;
        Ok(decode_platforms(&body)?)
    }

    /// Lists the channels of `platform`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn channels(&self, platform: PlatformType) -> Result<Vec<Channel>, FetchError> {
        let url = channels_url(&self.base_url, platform)?;
        let body = fetch(self.transport.as_ref(), url).await?;
        Ok(decode_channels(&body)?)
    }

    /// Lists the channels of every platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn all_channels(&self) -> Result<Vec<Channel>, FetchError> {
        self.channels(PlatformType::All).await
    }

    /// Lists the versions of `platform` on `channel`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn versions(
        &self,
        platform: PlatformType,
        channel: ChannelType,
    ) -> Result<Vec<Version>, FetchError> {
        self.versions_with_query(platform, channel, &[]).await
    }

    /// Lists versions with explicit query parameters.
    ///
    /// `query` holds alternating keys and values (e.g.
    /// `["order_by", "version desc", "page_size", "10"]`). When empty, the
    /// listing is ordered by descending version.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidQuery`] without issuing a request if
    /// `query` has an odd length, or an error if the request or decoding fails.
    pub async fn versions_with_query(
        &self,
        platform: PlatformType,
        channel: ChannelType,
        query: &[&str],
    ) -> Result<Vec<Version>, FetchError> {
        let url = versions_url(&self.base_url, platform, channel, query)?;
        let body = fetch(self.transport.as_ref(), url).await?;
        Ok(decode_versions(&body)?)
    }

    /// Returns the latest version of `platform` on `channel`.
    ///
    /// "Latest" is the first entry of the descending listing; no local sort
    /// is applied.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NoVersionsReturned`] if the listing is empty, or
    /// an error if the request or decoding fails.
    pub async fn latest(
        &self,
        platform: PlatformType,
        channel: ChannelType,
    ) -> Result<Version, FetchError> {
        self.versions(platform, channel)
            .await?
            .into_iter()
            .next()
            .ok_or(FetchError::NoVersionsReturned)
    }

    /// Builds a user-agent string for the latest version of `platform` on `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the latest version cannot be retrieved.
    pub async fn user_agent(
        &self,
        platform: PlatformType,
        channel: ChannelType,
    ) -> Result<String, FetchError> {
        let latest = self.latest(platform, channel).await?;
        Ok(crate::user_agent::user_agent(&latest.version, platform))
    }
}

/// Lists the known platforms using a default client.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the request fails.
pub async fn platforms() -> Result<Vec<Platform>, FetchError> {
    HistoryClient::with_defaults()?.platforms().await
}

/// Lists the channels of `platform` using a default client.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the request fails.
pub async fn channels(platform: PlatformType) -> Result<Vec<Channel>, FetchError> {
    HistoryClient::with_defaults()?.channels(platform).await
}

/// Lists the channels of every platform using a default client.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the request fails.
pub async fn all_channels() -> Result<Vec<Channel>, FetchError> {
    HistoryClient::with_defaults()?.all_channels().await
}

/// Lists the versions of `platform` on `channel` using a default client.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the request fails.
pub async fn versions(
    platform: PlatformType,
    channel: ChannelType,
) -> Result<Vec<Version>, FetchError> {
    HistoryClient::with_defaults()?
        .versions(platform, channel)
        .await
}

/// Returns the latest version of `platform` on `channel` using a default client.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the request fails.
pub async fn latest(platform: PlatformType, channel: ChannelType) -> Result<Version, FetchError> {
    HistoryClient::with_defaults()?
        .latest(platform, channel)
        .await
}

/// Builds a user-agent string for `platform` on `channel` using a default client.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), verhist_fetch::FetchError> {
/// use verhist_types::{ChannelType, PlatformType};
///
/// let ua = verhist_fetch::history::user_agent(PlatformType::Linux, ChannelType::Stable).await?;
/// assert!(ua.contains("Chrome/"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the client cannot be created or the request fails.
pub async fn user_agent(platform: PlatformType, channel: ChannelType) -> Result<String, FetchError> {
    HistoryClient::with_defaults()?
        .user_agent(platform, channel)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use reqwest::StatusCode;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VERSIONS_JSON: &str = r#"{"versions":[
        {"name":"chrome/platforms/linux/channels/stable/versions/121.0.6167.85","version":"121.0.6167.85"},
        {"name":"chrome/platforms/linux/channels/stable/versions/120.0.6099.224","version":"120.0.6099.224"}
    ],"nextPageToken":""}"#;

    fn stub_client(stub: &Arc<StubTransport>) -> HistoryClient {
        let config = ClientConfig::default().with_history_url("http://stub.local/v1/chrome");
        HistoryClient::with_transport(config, Arc::clone(stub))
    }

    #[tokio::test]
    async fn test_latest_is_first_entry() {
        let stub = Arc::new(StubTransport::ok(VERSIONS_JSON));
        let client = stub_client(&stub);

        let latest = client
            .latest(PlatformType::Linux, ChannelType::Stable)
            .await
            .unwrap();
        assert_eq!(latest.version, "121.0.6167.85");
        assert_eq!(
            stub.urls(),
            vec![
                "http://stub.local/v1/chrome/platforms/linux/channels/stable/versions?order_by=version+desc"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_latest_empty_listing() {
        let stub = Arc::new(StubTransport::ok(r#"{"versions":[]}"#));
        let client = stub_client(&stub);

        let result = client.latest(PlatformType::Win64, ChannelType::Beta).await;
        assert!(matches!(result, Err(FetchError::NoVersionsReturned)));
    }

    #[tokio::test]
    async fn test_odd_query_issues_no_request() {
        let stub = Arc::new(StubTransport::ok(VERSIONS_JSON));
        let client = stub_client(&stub);

        let result = client
            .versions_with_query(
                PlatformType::Linux,
                ChannelType::Stable,
                &["order_by", "version desc", "page_size"],
            )
            .await;
        assert!(matches!(result, Err(FetchError::InvalidQuery)));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_status_error_skips_decode() {
        let stub = Arc::new(StubTransport::new(StatusCode::NOT_FOUND, "<html>nope</html>"));
        let client = stub_client(&stub);

        let result = client.versions(PlatformType::Linux, ChannelType::Dev).await;
        assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_user_agent() {
        let stub = Arc::new(StubTransport::ok(VERSIONS_JSON));
        let client = stub_client(&stub).with_logging();

        let ua = client
            .user_agent(PlatformType::Linux, ChannelType::Stable)
            .await
            .unwrap();
        assert_eq!(
            ua,
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_user_agent_every_pair() {
        let stub = Arc::new(StubTransport::ok(VERSIONS_JSON));
        let client = stub_client(&stub);

        for platform in PlatformType::all() {
            for channel in ChannelType::all() {
                let ua = client.user_agent(*platform, *channel).await.unwrap();
                assert!(!ua.is_empty());
                assert!(ua.contains("Chrome/"));
            }
        }
        assert_eq!(
            stub.calls(),
            PlatformType::all().len() * ChannelType::all().len()
        );
    }

    #[tokio::test]
    async fn test_versions_against_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/chrome/platforms/win64/channels/canary/versions"))
            .and(query_param("order_by", "version desc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VERSIONS_JSON))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config =
            ClientConfig::default().with_history_url(format!("{}/v1/chrome", mock_server.uri()));
        let client = HistoryClient::new(config).unwrap();

        let versions = client
            .versions(PlatformType::Win64, ChannelType::Canary)
            .await
            .unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1].version, "120.0.6099.224");
    }

    #[tokio::test]
    async fn test_platforms_and_channels_against_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/chrome/platforms"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"platforms":[
                    {"name":"chrome/platforms/win","platformType":"WIN"},
                    {"name":"chrome/platforms/mac_arm64","platformType":"MAC_ARM64"}
                ]}"#,
            ))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/chrome/platforms/all/channels"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"channels":[
                    {"name":"chrome/platforms/all/channels/stable","channelType":"STABLE"},
                    {"name":"chrome/platforms/all/channels/extended","channelType":"EXTENDED"}
                ]}"#,
            ))
            .mount(&mock_server)
            .await;

        let config =
            ClientConfig::default().with_history_url(format!("{}/v1/chrome", mock_server.uri()));
        let client = HistoryClient::new(config).unwrap();

        let platforms = client.platforms().await.unwrap();
        assert_eq!(
            platforms
                .iter()
                .map(|p| p.platform_type)
                .collect::<Vec<_>>(),
            vec![PlatformType::Win, PlatformType::MacArm64]
        );

        let channels = client.all_channels().await.unwrap();
        assert_eq!(channels[1].channel_type, ChannelType::Extended);
    }

    #[tokio::test]
    async fn test_unknown_field_from_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/chrome/platforms/linux/channels/stable/versions"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"versions":[{"name":"n","version":"121.0.6167.85","pinnable":true}]}"#,
            ))
            .mount(&mock_server)
            .await;

        let config =
            ClientConfig::default().with_history_url(format!("{}/v1/chrome", mock_server.uri()));
        let client = HistoryClient::new(config).unwrap();

        let result = client.latest(PlatformType::Linux, ChannelType::Stable).await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }
}

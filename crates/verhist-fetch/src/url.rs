//! Request URL construction.

use url::Url;
use verhist_types::{ChannelType, PlatformType};

use crate::FetchError;

/// Base URL for the Chrome version history API.
pub const HISTORY_BASE_URL: &str = "https://versionhistory.googleapis.com/v1/chrome";

/// Base URL for the release history proxy.
pub const PROXY_BASE_URL: &str = "https://omahaproxy.appspot.com";

/// Query applied to version listings when the caller supplies none.
pub const DEFAULT_VERSIONS_QUERY: [&str; 2] = ["order_by", "version desc"];

/// Builds the platform listing URL.
///
/// URL format: `{base}/platforms`
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn platforms_url(base: &str) -> Result<Url, FetchError> {
    Ok(Url::parse(&format!("{}/platforms", trim(base)))?)
}

/// Builds the channel listing URL for a platform.
///
/// URL format: `{base}/platforms/{platform}/channels`
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn channels_url(base: &str, platform: PlatformType) -> Result<Url, FetchError> {
    Ok(Url::parse(&format!(
        "{}/platforms/{}/channels",
        trim(base),
        platform
    ))?)
}

/// Builds the version listing URL for a platform and channel.
///
/// URL format: `{base}/platforms/{platform}/channels/{channel}/versions?{query}`
///
/// `query` is a flat list of alternating keys and values. An empty list
/// falls back to [`DEFAULT_VERSIONS_QUERY`].
///
/// # Example
///
/// ```
/// use verhist_fetch::url::{HISTORY_BASE_URL, versions_url};
/// use verhist_types::{ChannelType, PlatformType};
///
/// let url = versions_url(HISTORY_BASE_URL, PlatformType::Linux, ChannelType::Stable, &[]).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://versionhistory.googleapis.com/v1/chrome/platforms/linux/channels/stable/versions?order_by=version+desc"
/// );
/// ```
///
/// # Errors
///
/// Returns [`FetchError::InvalidQuery`] if `query` has an odd length, or an
/// error if `base` is not a valid URL.
pub fn versions_url(
    base: &str,
    platform: PlatformType,
    channel: ChannelType,
    query: &[&str],
) -> Result<Url, FetchError> {
    let query = if query.is_empty() {
        &DEFAULT_VERSIONS_QUERY[..]
    } else {
        query
    };
    if !query.len().is_multiple_of(2) {
        return Err(FetchError::InvalidQuery);
    }

    let mut url = Url::parse(&format!(
        "{}/platforms/{}/channels/{}/versions",
        trim(base),
        platform,
        channel
    ))?;
    {
        let mut pairs = url.query_pairs_mut();
        for pair in query.chunks_exact(2) {
            pairs.append_pair(pair[0], pair[1]);
        }
    }
    Ok(url)
}

/// Builds the release history CSV URL.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn history_url(base: &str) -> Result<Url, FetchError> {
    Ok(Url::parse(&format!("{}/history", trim(base)))?)
}

/// Builds the OS-grouped version entries URL.
///
/// # Errors
///
/// Returns an error if `base` is not a valid URL.
pub fn entries_url(base: &str) -> Result<Url, FetchError> {
    Ok(Url::parse(&format!("{}/json", trim(base)))?)
}

fn trim(base: &str) -> &str {
    base.trim_end_matches('/')
}

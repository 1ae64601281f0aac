//! Rust library for querying Chrome version history and synthesizing user agents.
//!
//! This is a facade crate that re-exports functionality from the verhist
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use verhist_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HistoryClient::with_defaults()?;
//!
//!     let latest = client.latest(PlatformType::Linux, ChannelType::Stable).await?;
//!     println!("latest stable: {}", latest.version);
//!
//!     let ua = client.user_agent(PlatformType::Linux, ChannelType::Stable).await?;
//!     println!("user agent: {ua}");
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/chromedp/verhist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use verhist_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use verhist_fetch::{
    ClientConfig, DecodeError, FALLBACK_VERSION, FetchError, HistoryClient, LoggingTransport,
    ProxyClient, ReqwestTransport, Transport, decode, history, proxy, url, user_agent,
};

/// Prelude module for convenient imports.
///
/// ```
/// use verhist_lib::prelude::*;
/// ```
pub mod prelude {
    pub use verhist_types::{
        Channel, ChannelType, Platform, PlatformType, ProxyVersion, Release, TypeParseError,
        Version, VersionEntry,
    };

    #[cfg(feature = "fetch")]
    pub use verhist_fetch::{
        ClientConfig, FetchError, HistoryClient, LoggingTransport, ProxyClient, Transport,
        user_agent,
    };
}

//! HTTP clients for the Chrome version history API and release history proxy.
//!
//! This crate provides the request pipeline:
//!
//! - [`url`] - Request URL construction
//! - [`Transport`] - Pluggable request execution, with [`LoggingTransport`] for tracing
//! - [`decode`] - Strict CSV and JSON decoding
//! - [`HistoryClient`] / [`ProxyClient`] - Clients for the two services
//! - [`user_agent()`] - User-agent synthesis from a version string
//!
//! The [`history`] and [`proxy`] modules also expose free functions that
//! build a default client per call.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/chromedp/verhist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod decode;
mod error;
pub mod history;
pub mod proxy;
mod transport;
pub mod url;
mod user_agent;

#[cfg(test)]
mod testing;

pub use client::ClientConfig;
pub use error::{DecodeError, FetchError};
pub use history::HistoryClient;
pub use proxy::ProxyClient;
pub use transport::{LoggingTransport, ReqwestTransport, Transport};
pub use user_agent::{FALLBACK_VERSION, user_agent};

//! Core types for the Chrome version history clients.
//!
//! This crate provides the data structures decoded from the two upstream services:
//!
//! - [`PlatformType`] / [`ChannelType`] - Closed platform and channel enumerations
//! - [`Platform`] / [`Channel`] - Version history API platform and channel records
//! - [`Version`] - Version history API version record
//! - [`ProxyVersion`] / [`VersionEntry`] - Release history proxy records, grouped by OS
//! - [`Release`] - A single row of the release history CSV

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/chromedp/verhist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod channel;
mod error;
mod platform;
mod release;
mod version;

pub use channel::{Channel, ChannelType};
pub use error::TypeParseError;
pub use platform::{Platform, PlatformType};
pub use release::Release;
pub use version::{ProxyVersion, Version, VersionEntry};

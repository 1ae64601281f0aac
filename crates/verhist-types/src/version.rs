//! Version records.
//!
//! The version history API and the release history proxy use different
//! schemas for a "version"; they are kept as separate types. Absent keys
//! decode as empty values, unknown keys are rejected.

use serde::{Deserialize, Serialize};

/// A version record from the version history API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Version {
    /// Resource name (e.g., "chrome/platforms/win/channels/stable/versions/121.0.6167.85").
    pub name: String,
    /// Dotted version string.
    pub version: String,
}

/// A version record from the release history proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyVersion {
    /// Branch commit hash.
    pub branch_commit: String,
    /// Branch base position.
    pub branch_base_position: String,
    /// Skia commit hash.
    pub skia_commit: String,
    /// V8 version.
    pub v8_version: String,
    /// Previously released version.
    pub previous_version: String,
    /// V8 commit hash.
    pub v8_commit: String,
    /// Branch number.
    pub true_branch: String,
    /// Release date of the previous version.
    pub previous_reldate: String,
    /// Branch base commit hash.
    pub branch_base_commit: String,
    /// Dotted version string.
    pub version: String,
    /// Release date of the current version.
    pub current_reldate: String,
    /// Current version.
    pub current_version: String,
    /// Operating system.
    pub os: String,
    /// Release channel.
    pub channel: String,
    /// Chromium commit hash.
    pub chromium_commit: String,
}

impl std::fmt::Display for ProxyVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chromium {} (v8: {}, os: {}, channel: {})",
            self.version, self.v8_version, self.os, self.channel
        )
    }
}

/// Release history proxy versions grouped by operating system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VersionEntry {
    /// Operating system.
    pub os: String,
    /// Versions available for the operating system, one per channel.
    pub versions: Vec<ProxyVersion>,
}

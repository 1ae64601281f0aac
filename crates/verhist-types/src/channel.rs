//! Release channel definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TypeParseError;

/// Release channel identifier understood by the version history API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelType {
    /// Stable channel.
    Stable,
    /// Beta channel.
    Beta,
    /// Dev channel.
    Dev,
    /// Canary channel.
    Canary,
    /// Canary channel with AddressSanitizer builds.
    CanaryAsan,
    /// Pseudo-channel matching every channel.
    All,
    /// Extended stable channel.
    Extended,
    /// Long-term support channel.
    Lts,
    /// Long-term candidate channel.
    Ltc,
}

impl ChannelType {
    /// Returns the channel as its path identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Beta => "beta",
            Self::Dev => "dev",
            Self::Canary => "canary",
            Self::CanaryAsan => "canary_asan",
            Self::All => "all",
            Self::Extended => "extended",
            Self::Lts => "lts",
            Self::Ltc => "ltc",
        }
    }

    /// Returns all known channels.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Stable,
            Self::Beta,
            Self::Dev,
            Self::Canary,
            Self::CanaryAsan,
            Self::All,
            Self::Extended,
            Self::Lts,
            Self::Ltc,
        ]
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|channel| channel.as_str() == lower)
            .ok_or_else(|| TypeParseError::InvalidChannelType(s.to_string()))
    }
}

/// A channel record from the version history API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Channel {
    /// Resource name (e.g., "chrome/platforms/win64/channels/stable"); empty when absent.
    #[serde(default)]
    pub name: String,
    /// Channel identifier.
    pub channel_type: ChannelType,
}

//! Release history rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single release from the release history proxy CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Operating system.
    pub os: String,
    /// Release channel.
    pub channel: String,
    /// Dotted version string.
    pub version: String,
    /// Release timestamp (UTC).
    pub timestamp: DateTime<Utc>,
}

impl Release {
    /// Creates a new release.
    #[must_use]
    pub fn new(
        os: impl Into<String>,
        channel: impl Into<String>,
        version: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            os: os.into(),
            channel: channel.into(),
            version: version.into(),
            timestamp,
        }
    }
}

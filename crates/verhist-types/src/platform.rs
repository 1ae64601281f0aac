//! Platform definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TypeParseError;

/// Platform identifier understood by the version history API.
///
/// The wire form is upper snake case (`WIN64`), the path form used in URLs
/// and on the command line is lower snake case (`win64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformType {
    /// 32-bit Windows.
    Win,
    /// 64-bit Windows.
    Win64,
    /// Intel macOS.
    Mac,
    /// Linux.
    Linux,
    /// Android.
    Android,
    /// Android WebView.
    Webview,
    /// iOS.
    Ios,
    /// Pseudo-platform matching every platform.
    All,
    /// Apple Silicon macOS.
    MacArm64,
    /// Lacros.
    Lacros,
    /// 32-bit ARM Lacros.
    LacrosArm32,
    /// ChromeOS.
    Chromeos,
    /// 64-bit ARM Lacros.
    LacrosArm64,
    /// Fuchsia.
    Fuchsia,
    /// ARM Windows.
    WinArm64,
}

impl PlatformType {
    /// Returns the platform as its path identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Win64 => "win64",
            Self::Mac => "mac",
            Self::Linux => "linux",
            Self::Android => "android",
            Self::Webview => "webview",
            Self::Ios => "ios",
            Self::All => "all",
            Self::MacArm64 => "mac_arm64",
            Self::Lacros => "lacros",
            Self::LacrosArm32 => "lacros_arm32",
            Self::Chromeos => "chromeos",
            Self::LacrosArm64 => "lacros_arm64",
            Self::Fuchsia => "fuchsia",
            Self::WinArm64 => "win_arm64",
        }
    }

    /// Returns all known platforms.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Win,
            Self::Win64,
            Self::Mac,
            Self::Linux,
            Self::Android,
            Self::Webview,
            Self::Ios,
            Self::All,
            Self::MacArm64,
            Self::Lacros,
            Self::LacrosArm32,
            Self::Chromeos,
            Self::LacrosArm64,
            Self::Fuchsia,
            Self::WinArm64,
        ]
    }
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlatformType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|platform| platform.as_str() == lower)
            .ok_or_else(|| TypeParseError::InvalidPlatformType(s.to_string()))
    }
}

/// A platform record from the version history API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Platform {
    /// Resource name (e.g., "chrome/platforms/win64"); empty when absent.
    #[serde(default)]
    pub name: String,
    /// Platform identifier.
    pub platform_type: PlatformType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("win64".parse::<PlatformType>().unwrap(), PlatformType::Win64);
        assert_eq!(
            "MAC_ARM64".parse::<PlatformType>().unwrap(),
            PlatformType::MacArm64
        );
        assert_eq!("Linux".parse::<PlatformType>().unwrap(), PlatformType::Linux);
    }

    #[test]
    fn test_platform_parse_invalid() {
        let err = "beos".parse::<PlatformType>().unwrap_err();
        assert_eq!(err, TypeParseError::InvalidPlatformType("beos".to_string()));
    }

    #[test]
    fn test_platform_display_round_trip() {
        for platform in PlatformType::all() {
            let parsed: PlatformType = platform.to_string().parse().unwrap();
            assert_eq!(parsed, *platform);
        }
    }

    #[test]
    fn test_platform_wire_form() {
        let json = serde_json::to_string(&PlatformType::WinArm64).unwrap();
        assert_eq!(json, "\"WIN_ARM64\"");

        for platform in PlatformType::all() {
            let json = serde_json::to_string(platform).unwrap();
            let back: PlatformType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *platform);
            assert_eq!(json.trim_matches('"').to_lowercase(), platform.as_str());
        }
    }

    #[test]
    fn test_platform_record_strict() {
        let platform: Platform =
            serde_json::from_str(r#"{"name":"chrome/platforms/linux","platformType":"LINUX"}"#)
                .unwrap();
        assert_eq!(platform.platform_type, PlatformType::Linux);

        let unknown_field = serde_json::from_str::<Platform>(
            r#"{"name":"chrome/platforms/linux","platformType":"LINUX","extra":1}"#,
        );
        assert!(unknown_field.is_err());

        let unknown_type = serde_json::from_str::<Platform>(
            r#"{"name":"chrome/platforms/beos","platformType":"BEOS"}"#,
        );
        assert!(unknown_type.is_err());

        let unnamed: Platform = serde_json::from_str(r#"{"platformType":"IOS"}"#).unwrap();
        assert_eq!(unnamed.name, "");
    }
}

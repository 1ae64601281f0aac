//! Browser user-agent synthesis.

use verhist_types::PlatformType;

/// Version token used when the input has no major component.
pub const FALLBACK_VERSION: &str = "120.0.0.0";

/// Builds a Chrome user-agent string for `version` on `platform`.
///
/// Only the major component of `version` is kept (`121.0.6167.85` becomes
/// `121.0.0.0`), matching the reduced user-agent Chrome sends. The input is
/// not validated as a real Chrome version.
///
/// # Example
///
/// ```
/// use verhist_fetch::user_agent;
/// use verhist_types::PlatformType;
///
/// assert_eq!(
///     user_agent("121.0.6167.85", PlatformType::Linux),
///     "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
/// );
/// ```
#[must_use]
pub fn user_agent(version: &str, platform: PlatformType) -> String {
    let (os, extra) = match platform {
        PlatformType::Linux => ("X11; Linux x86_64", ""),
        PlatformType::Mac | PlatformType::MacArm64 => ("Macintosh; Intel Mac OS X 10_15_7", ""),
        PlatformType::Android => ("Linux; Android 10; K", " Mobile"),
        _ => ("Windows NT 10.0; Win64; x64", ""),
    };

    let version = version
        .split_once('.')
        .map_or_else(|| FALLBACK_VERSION.to_string(), |(major, _)| format!("{major}.0.0.0"));

    format!(
        "Mozilla/5.0 ({os}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}{extra} Safari/537.36"
    )
}

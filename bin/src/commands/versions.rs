//! Version listing, latest version and user agent output.

use anyhow::{Result, bail};
use std::io::Write;
use verhist_lib::prelude::*;

use crate::display::{write_json, write_line};

/// What to print for a platform/channel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Pretty-printed JSON array of every version.
    All,
    /// The latest version string only.
    Latest,
    /// A user agent string built from the latest version.
    UserAgent,
}

/// Print versions for `platform` on `channel` according to `mode`.
pub(crate) async fn versions<W: Write>(
    client: &HistoryClient,
    out: W,
    platform: PlatformType,
    channel: ChannelType,
    mode: Mode,
) -> Result<()> {
    if mode == Mode::UserAgent {
        let ua = client.user_agent(platform, channel).await?;
        return write_line(out, &ua);
    }

    let versions = client.versions(platform, channel).await?;
    let Some(latest) = versions.first() else {
        bail!(FetchError::NoVersionsReturned);
    };

    match mode {
        Mode::Latest => write_line(out, &latest.version),
        _ => write_json(out, &versions),
    }
}

//! Platform and channel listings.

use anyhow::Result;
use std::io::Write;
use verhist_lib::prelude::*;

use crate::display::write_json;

/// Print every platform known to the API.
pub(crate) async fn platforms<W: Write>(client: &HistoryClient, out: W) -> Result<()> {
    let platforms = client.platforms().await?;
    write_json(out, &platforms)
}

/// Print the channels available for `platform`.
pub(crate) async fn channels<W: Write>(
    client: &HistoryClient,
    out: W,
    platform: PlatformType,
) -> Result<()> {
    let channels = client.channels(platform).await?;
    write_json(out, &channels)
}

//! Output helpers for the verhist CLI.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Write `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write a single line of text.
pub(crate) fn write_line<W: Write>(mut out: W, line: &str) -> Result<()> {
    writeln!(out, "{line}")?;
    Ok(())
}

//! Response body decoding.
//!
//! CSV bodies come from the release history proxy; JSON bodies from both
//! services. JSON decoding is strict: a key unknown to the target schema is
//! a decode error, not silently ignored. Absent keys decode as empty values.

use chrono::{DateTime, NaiveDateTime, Utc};
use csv_async::{AsyncReaderBuilder, Trim};
use futures::StreamExt;
use serde::Deserialize;
use verhist_types::{Channel, Platform, Release, Version, VersionEntry};

use crate::DecodeError;

/// Number of fields in a release history row.
pub const FIELDS_PER_RECORD: usize = 4;

/// Timestamp format of the release history CSV (fractional seconds optional).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Decodes the release history CSV into releases, in file order.
///
/// The first row is a header and is skipped. Every row, header included,
/// must have exactly [`FIELDS_PER_RECORD`] fields. Leading whitespace is
/// stripped from each field; trailing whitespace is kept.
///
/// # Errors
///
/// Returns an error on malformed CSV, a row with the wrong field count, or an
/// unparsable timestamp. No releases are returned in that case.
pub async fn decode_history(body: &[u8]) -> Result<Vec<Release>, DecodeError> {
    let mut reader = AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .create_reader(body);

    let mut records = reader.records();
    let mut history = Vec::new();
    let mut header_seen = false;

    while let Some(record) = records.next().await {
        let record = record?;
        if record.len() != FIELDS_PER_RECORD {
            return Err(DecodeError::FieldCount {
                line: record.position().map_or(0, csv_async::Position::line),
                expected: FIELDS_PER_RECORD,
                found: record.len(),
            });
        }

        if !header_seen {
            header_seen = true;
            continue;
        }

        let field = |i: usize| record[i].trim_start();
        history.push(Release::new(
            field(0),
            field(1),
            field(2),
            parse_timestamp(field(3))?,
        ));
    }

    Ok(history)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DecodeError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| DecodeError::Timestamp {
            value: value.to_string(),
            source,
        })
}

/// Decodes the OS-grouped version entries returned by the release history proxy.
///
/// # Errors
///
/// Returns an error on malformed JSON or any field absent from the schema.
pub fn decode_entries(body: &[u8]) -> Result<Vec<VersionEntry>, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct VersionsPage {
    #[serde(default)]
    versions: Vec<Version>,
    #[serde(default)]
    #[allow(dead_code)]
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PlatformsPage {
    #[serde(default)]
    platforms: Vec<Platform>,
    #[serde(default)]
    #[allow(dead_code)]
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ChannelsPage {
    #[serde(default)]
    channels: Vec<Channel>,
    #[serde(default)]
    #[allow(dead_code)]
    next_page_token: Option<String>,
}

/// Decodes a version history API version listing.
///
/// # Errors
///
/// Returns an error on malformed JSON or any field absent from the schema.
pub fn decode_versions(body: &[u8]) -> Result<Vec<Version>, DecodeError> {
    let page: VersionsPage = serde_json::from_slice(body)?;
    Ok(page.versions)
}

/// Decodes a version history API platform listing.
///
/// # Errors
///
/// Returns an error on malformed JSON, an unknown platform type, or any field
/// absent from the schema.
pub fn decode_platforms(body: &[u8]) -> Result<Vec<Platform>, DecodeError> {
    let page: PlatformsPage = serde_json::from_slice(body)?;
    Ok(page.platforms)
}

/// Decodes a version history API channel listing.
///
/// # Errors
///
/// Returns an error on malformed JSON, an unknown channel type, or any field
/// absent from the schema.
pub fn decode_channels(body: &[u8]) -> Result<Vec<Channel>, DecodeError> {
    let page: ChannelsPage = serde_json::from_slice(body)?;
    Ok(page.channels)
}

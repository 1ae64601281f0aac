//! Error types for fetching and decoding.

use thiserror::Error;

/// Errors that can occur while decoding a response body.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    /// A CSV row did not have the expected number of fields.
    #[error("wrong number of fields on line {line}: expected {expected}, found {found}")]
    FieldCount {
        /// Line number of the offending row.
        line: u64,
        /// Expected field count.
        expected: usize,
        /// Actual field count.
        found: usize,
    },

    /// A release timestamp could not be parsed.
    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        /// The raw field value.
        value: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },

    /// Malformed JSON input, including fields absent from the schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while querying either service.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Query arguments were not supplied as key/value pairs.
    #[error("invalid query")]
    InvalidQuery,

    /// The request could not be built from the configured base URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The transport failed (DNS, connection, TLS, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status other than 200 OK.
    #[error("could not retrieve {url} (status: {status})")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// No version matched the requested OS and channel.
    #[error("could not find latest version for channel {channel} ({os})")]
    NotFound {
        /// Requested channel.
        channel: String,
        /// Requested operating system.
        os: String,
    },

    /// The server returned an empty version list.
    #[error("no versions returned")]
    NoVersionsReturned,
}

impl FetchError {
    /// Returns the HTTP status code if this is a status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Error types for verhist types.

use thiserror::Error;

/// Error returned when text does not name a known platform or channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeParseError {
    /// Unknown platform identifier.
    #[error("invalid platform type '{0}'")]
    InvalidPlatformType(String),

    /// Unknown channel identifier.
    #[error("invalid channel type '{0}'")]
    InvalidChannelType(String),
}

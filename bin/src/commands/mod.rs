//! CLI command implementations.

pub(crate) mod listing;
pub(crate) mod versions;

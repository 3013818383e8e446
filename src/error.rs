//! Errors returned by versioned sequences.

use thiserror::Error;

use crate::version::VersionId;

/// A failed read or write. A failed operation never publishes a version.
///
/// Ids and indices are signed so that negative arguments arriving from
/// scripts can be reported as given.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The version id was never assigned.
    #[error("version {version} does not exist (current version is {current})")]
    InvalidVersion { version: i64, current: VersionId },

    /// The index is negative or not below the size of the version.
    #[error("index {index} is out of range for version {version} of size {size}")]
    IndexOutOfRange {
        index: i64,
        version: VersionId,
        size: usize,
    },
}

impl Error {
    /// A stable, machine-readable name for the error.
    pub fn kind(&self) -> &'static str {
        return match self {
            Error::InvalidVersion { .. } => "invalid_version",
            Error::IndexOutOfRange { .. } => "index_out_of_range",
        };
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Widen an unsigned id or index for reporting.
pub(crate) fn signed(value: usize) -> i64 {
    return i64::try_from(value).unwrap_or(i64::MAX);
}

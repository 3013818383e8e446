//! Replayable operation scripts.
//!
//! A script is a JSON document listing an initial sequence and a series of
//! operations against a [`PersistentList`]:
//!
//! ```json
//! {
//!   "initial": [1, 2, 3],
//!   "ops": [
//!     { "op": "append", "version": 0, "value": 4 },
//!     { "op": "set", "version": 1, "index": 0, "value": 10 },
//!     { "op": "get", "version": 0, "index": 0 },
//!     { "op": "get", "version": -1, "index": 0 }
//!   ]
//! }
//! ```
//!
//! Versions and indices are signed, so negative arguments are accepted and
//! rejected with the same errors as any other invalid argument. Each op
//! produces one [`Outcome`], and a failed op does not stop the replay.

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;
use crate::list::PersistentList;
use crate::version::VersionId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op<T> {
    Get { version: i64, index: i64 },
    Set { version: i64, index: i64, value: T },
    Append { version: i64, value: T },
    Size { version: i64 },
    Current,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome<T> {
    Value { value: T },
    Version { version: VersionId },
    Size { size: usize },
    Error { kind: String, message: String },
}

impl<T> From<Error> for Outcome<T> {
    fn from(err: Error) -> Outcome<T> {
        return Outcome::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Script<T> {
    #[serde(default)]
    pub initial: Vec<T>,
    pub ops: Vec<Op<T>>,
}

impl<T: Clone> Script<T> {
    /// Build the initial list and replay every op against it.
    pub fn run(self) -> (PersistentList<T>, Vec<Outcome<T>>) {
        let mut list = PersistentList::new(self.initial);
        let outcomes = replay(&mut list, self.ops);
        return (list, outcomes);
    }
}

/// Apply `ops` in order, collecting one outcome per op.
pub fn replay<T: Clone>(list: &mut PersistentList<T>, ops: impl IntoIterator<Item = Op<T>>) -> Vec<Outcome<T>> {
    let mut outcomes = Vec::new();
    for op in ops {
        let outcome = apply(list, op).unwrap_or_else(Outcome::from);
        outcomes.push(outcome);
    }
    return outcomes;
}

/// Apply a single op.
pub fn apply<T: Clone>(list: &mut PersistentList<T>, op: Op<T>) -> Result<Outcome<T>> {
    tracing::trace!(op = op.name(), "applying op");
    return match op {
        Op::Get { version, index } => {
            let version = version_arg(list, version)?;
            let index = index_arg(list, version, index)?;
            let value = list.get(version, index)?.clone();
            Ok(Outcome::Value { value })
        }
        Op::Set { version, index, value } => {
            let version = version_arg(list, version)?;
            let index = index_arg(list, version, index)?;
            let version = list.set(version, index, value)?;
            Ok(Outcome::Version { version })
        }
        Op::Append { version, value } => {
            let version = version_arg(list, version)?;
            let version = list.append(version, value)?;
            Ok(Outcome::Version { version })
        }
        Op::Size { version } => {
            let version = version_arg(list, version)?;
            let size = list.get_size(version)?;
            Ok(Outcome::Size { size })
        }
        Op::Current => Ok(Outcome::Version {
            version: list.current_version(),
        }),
    };
}

impl<T> Op<T> {
    pub fn name(&self) -> &'static str {
        return match self {
            Op::Get { .. } => "get",
            Op::Set { .. } => "set",
            Op::Append { .. } => "append",
            Op::Size { .. } => "size",
            Op::Current => "current",
        };
    }
}

fn version_arg<T>(list: &PersistentList<T>, version: i64) -> Result<VersionId> {
    let invalid = || Error::InvalidVersion {
        version,
        current: list.current_version(),
    };
    let id = usize::try_from(version).map_err(|_| invalid())?;
    return Ok(VersionId(id));
}

/// Convert a signed index once `version` is known to exist.
fn index_arg<T>(list: &PersistentList<T>, version: VersionId, index: i64) -> Result<usize> {
    let size = list.get_size(version)?;
    return usize::try_from(index).map_err(|_| Error::IndexOutOfRange { index, version, size });
}

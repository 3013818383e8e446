//! Versioned - persistent, multi-version indexable sequences.
//!
//! Every write produces a new version while all earlier versions stay
//! readable and unchanged. Versions share structure: a write copies only the
//! O(log n) nodes on one root-to-leaf path and reuses everything else.
//!
//! # Quick Start
//!
//! ```
//! use versioned::{PersistentList, VersionId};
//!
//! let mut list = PersistentList::new([1, 2, 3]);
//! let v1 = list.append(VersionId(0), 4).unwrap();
//! let v2 = list.set(v1, 0, 10).unwrap();
//!
//! assert_eq!(list.get(VersionId(0), 0), Ok(&1));
//! assert_eq!(list.get(v1, 3), Ok(&4));
//! assert_eq!(list.to_vec(v2).unwrap(), vec![10, 2, 3, 4]);
//! assert_eq!(list.current_version(), VersionId(2));
//! ```
//!
//! # Layout
//!
//! - `tree`: immutable size-augmented nodes and the algorithms over them
//! - `version`: the append-only version table and the `Versioned` trait
//! - `array`, `list`: the public sequences
//! - `snapshot`: detached read-only handles on one version
//! - `ops`: JSON-replayable operation scripts
//! - `config`, `logging`: runtime setup for the binary

pub mod array;
pub mod config;
pub mod error;
pub mod list;
pub mod logging;
pub mod ops;
pub mod snapshot;
pub mod tree;
pub mod version;

pub use array::PersistentArray;
pub use error::Error;
pub use error::Result;
pub use list::PersistentList;
pub use snapshot::Snapshot;
pub use version::VersionId;
pub use version::Versioned;

//! The version table: an append-only list of published roots.
//!
//! Every read and write resolves its version id here first. Writes build a
//! new root from the resolved one and publish it as the next id. Published
//! entries are never changed or removed, so a version id stays valid and its
//! contents stay fixed for the lifetime of the table.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;
use crate::error::signed;
use crate::tree;
use crate::tree::Copied;
use crate::tree::Iter;
use crate::tree::Node;

/// Dense identifier of a version. Version 0 is the initial sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionId(pub usize);

impl VersionId {
    /// The id of the initial version.
    pub const INITIAL: VersionId = VersionId(0);

    /// The id that follows this one.
    pub fn next(self) -> VersionId {
        return VersionId(self.0 + 1);
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl From<usize> for VersionId {
    fn from(id: usize) -> VersionId {
        return VersionId(id);
    }
}

/// A published version. Never modified after it is pushed.
struct Entry<T> {
    root: Arc<Node<T>>,
    size: usize,
}

/// Append-only mapping from version id to root.
///
/// Invariant: `entries` is never empty, and entry `i` holds version `i`.
pub struct VersionTable<T> {
    entries: Vec<Entry<T>>,
}

impl<T> VersionTable<T> {
    /// Create a table whose version 0 is `root`.
    pub fn new(root: Arc<Node<T>>) -> VersionTable<T> {
        let size = root.size();
        tracing::debug!(version = 0, size, "published initial version");
        return VersionTable {
            entries: vec![Entry { root, size }],
        };
    }

    /// The most recently published version.
    pub fn current(&self) -> VersionId {
        return VersionId(self.entries.len() - 1);
    }

    /// Number of published versions, always at least one.
    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    fn entry(&self, version: VersionId) -> Result<&Entry<T>> {
        return self.entries.get(version.0).ok_or_else(|| Error::InvalidVersion {
            version: signed(version.0),
            current: self.current(),
        });
    }

    /// The root of `version`.
    pub fn resolve(&self, version: VersionId) -> Result<&Arc<Node<T>>> {
        return Ok(&self.entry(version)?.root);
    }

    /// The element count recorded for `version`.
    pub fn size(&self, version: VersionId) -> Result<usize> {
        return Ok(self.entry(version)?.size);
    }

    /// Resolve `version` and check `index` against its size.
    fn locate(&self, version: VersionId, index: usize) -> Result<&Arc<Node<T>>> {
        let entry = self.entry(version)?;
        if index >= entry.size {
            return Err(Error::IndexOutOfRange {
                index: signed(index),
                version,
                size: entry.size,
            });
        }
        return Ok(&entry.root);
    }

    /// Append a new entry and advance the current version.
    fn publish(&mut self, root: Arc<Node<T>>) -> VersionId {
        let size = root.size();
        self.entries.push(Entry { root, size });
        return self.current();
    }

    /// The element at `index` in `version`.
    pub fn get(&self, version: VersionId, index: usize) -> Result<&T> {
        let root = self.locate(version, index)?;
        return tree::get(root, index).ok_or_else(|| Error::IndexOutOfRange {
            index: signed(index),
            version,
            size: root.size(),
        });
    }

    /// Publish a copy of `version` with `index` replaced by `value`.
    pub fn set(&mut self, version: VersionId, index: usize, value: T) -> Result<VersionId> {
        let root = self.locate(version, index)?;
        let Copied { root, allocated } = tree::set(root, index, value);
        let id = self.publish(root);
        tracing::debug!(from = version.0, version = id.0, index, allocated, "published set");
        return Ok(id);
    }

    /// Publish a copy of `version` with `value` added at the end.
    pub fn append(&mut self, version: VersionId, value: T) -> Result<VersionId> {
        let root = self.resolve(version)?;
        let Copied { root, allocated } = tree::append(root, value);
        let size = root.size();
        let id = self.publish(root);
        tracing::debug!(from = version.0, version = id.0, size, allocated, "published append");
        return Ok(id);
    }

    /// In-order iterator over `version`.
    pub fn iter(&self, version: VersionId) -> Result<Iter<'_, T>> {
        return Ok(Iter::new(self.resolve(version)?));
    }

    /// Height of the tree behind `version`.
    pub fn height(&self, version: VersionId) -> Result<usize> {
        return Ok(tree::height(self.resolve(version)?));
    }

    /// Distinct nodes reachable from any version.
    pub fn shared_node_count(&self) -> usize {
        let mut seen = FxHashSet::default();
        for entry in &self.entries {
            tree::visit(&entry.root, &mut seen);
        }
        return seen.len();
    }

    /// Sum of per-version node counts, as if nothing were shared.
    pub fn unshared_node_count(&self) -> usize {
        return self.entries.iter().map(|entry| tree::node_count(&entry.root)).sum();
    }
}

/// Operations common to every versioned sequence.
///
/// Reads take any published version. Writes derive a new version from any
/// published version, not just the current one, and return its id.
pub trait Versioned<T> {
    /// The element at `index` in `version`.
    fn get(&self, version: VersionId, index: usize) -> Result<&T>;

    /// Derive a new version with `index` replaced by `value`.
    fn set(&mut self, version: VersionId, index: usize, value: T) -> Result<VersionId>;

    /// Number of elements in `version`.
    fn get_size(&self, version: VersionId) -> Result<usize>;

    /// The most recently published version.
    fn current_version(&self) -> VersionId;

    /// Number of published versions.
    fn version_count(&self) -> usize;

    /// In-order iterator over `version`.
    fn iter(&self, version: VersionId) -> Result<Iter<'_, T>>;

    /// Collect `version` into a vector.
    fn to_vec(&self, version: VersionId) -> Result<Vec<T>>
    where
        T: Clone,
    {
        return Ok(self.iter(version)?.cloned().collect());
    }
}
